use std::rc::Rc;
use std::sync::Arc;

/// Cheap, non-recursive equality used to decide whether a cached result can
/// be reused.
///
/// Primitives and strings compare by value. Shared composite values ([`Rc`],
/// [`Arc`]) compare by address, never by content: two structurally equal but
/// separately allocated values are _not_ shallowly equal. A reference `&T`
/// compares like the `T` it points to, so `&str` compares by value. Tuples,
/// slices and vectors compare position by position, which is how whole
/// argument lists are compared.
///
/// There is intentionally no blanket implementation for `PartialEq` types.
/// A type opts in by deciding what "the same value" means for it.
pub trait Shallow {
    /// Whether `self` and `other` are the same value.
    fn shallow_eq(&self, other: &Self) -> bool;
}

/// Ensure a type is suitable as a memoized argument.
pub fn assert_shallow<T: Shallow + Clone>() {}

macro_rules! by_value {
    ($($ty:ty),* $(,)?) => {
        $(impl Shallow for $ty {
            #[inline]
            fn shallow_eq(&self, other: &Self) -> bool {
                self == other
            }
        })*
    };
}

by_value! {
    bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    str, String,
}

impl<T: Shallow + ?Sized> Shallow for &T {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other) || (**self).shallow_eq(*other)
    }
}

impl<T: ?Sized> Shallow for Rc<T> {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Shallow for Arc<T> {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: Shallow> Shallow for Option<T> {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.shallow_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Shallow> Shallow for [T] {
    fn shallow_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(a, b)| a.shallow_eq(b))
    }
}

impl<T: Shallow, const N: usize> Shallow for [T; N] {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        self.as_slice().shallow_eq(other.as_slice())
    }
}

impl<T: Shallow> Shallow for Vec<T> {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        self.as_slice().shallow_eq(other.as_slice())
    }
}

macro_rules! shallow_tuple {
    ($($param:tt $idx:tt),*) => {
        impl<$($param: Shallow),*> Shallow for ($($param,)*) {
            #[inline]
            #[allow(unused_variables)]
            fn shallow_eq(&self, other: &Self) -> bool {
                true $(&& self.$idx.shallow_eq(&other.$idx))*
            }
        }
    };
}

shallow_tuple! {}
shallow_tuple! { A 0 }
shallow_tuple! { A 0, B 1 }
shallow_tuple! { A 0, B 1, C 2 }
shallow_tuple! { A 0, B 1, C 2, D 3 }
shallow_tuple! { A 0, B 1, C 2, D 3, E 4 }
shallow_tuple! { A 0, B 1, C 2, D 3, E 4, F 5 }
shallow_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6 }
shallow_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7 }
shallow_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8 }
shallow_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9 }
shallow_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10 }
shallow_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11 }
