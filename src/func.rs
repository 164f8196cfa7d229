/// A function that takes its arguments as one tuple.
///
/// This is implemented for all `Fn` closures and function items taking up to
/// twelve positional arguments, with `Args` being the tuple of their argument
/// types. It is what lets a [`Memoized`](crate::Memoized) wrap functions of
/// any arity and what a selector's combiner must implement.
pub trait Func<Args> {
    /// The function's return type.
    type Output;

    /// Call the function, spreading the tuple into positional arguments.
    fn call(&self, args: Args) -> Self::Output;
}

macro_rules! func_tuple {
    ($($param:ident $idx:tt),*) => {
        impl<Fun, Out, $($param),*> Func<($($param,)*)> for Fun
        where
            Fun: Fn($($param),*) -> Out,
        {
            type Output = Out;

            #[inline]
            #[allow(unused_variables)]
            fn call(&self, args: ($($param,)*)) -> Out {
                (self)($(args.$idx),*)
            }
        }
    };
}

func_tuple! {}
func_tuple! { A 0 }
func_tuple! { A 0, B 1 }
func_tuple! { A 0, B 1, C 2 }
func_tuple! { A 0, B 1, C 2, D 3 }
func_tuple! { A 0, B 1, C 2, D 3, E 4 }
func_tuple! { A 0, B 1, C 2, D 3, E 4, F 5 }
func_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6 }
func_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7 }
func_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8 }
func_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9 }
func_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10 }
func_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11 }

#[cfg(test)]
mod tests {
    use super::*;

    fn apply<Args, F: Func<Args>>(f: F, args: Args) -> F::Output {
        f.call(args)
    }

    #[test]
    fn test_spread_arguments() {
        assert_eq!(apply(|| 7, ()), 7);
        assert_eq!(apply(|x: u8| x + 1, (1,)), 2);
        assert_eq!(apply(|a: &str, b: usize| a.len() + b, ("abc", 2)), 5);
        assert_eq!(apply(u32::max, (3, 9)), 9);
    }
}
