extern crate proc_macro;

macro_rules! bail {
    ($item:expr, $fmt:literal $($tts:tt)*) => {
        return Err(Error::new_spanned(
            &$item,
            format!(concat!("reselect: ", $fmt) $($tts)*)
        ))
    }
}

mod memoize;
mod select;

use proc_macro::TokenStream;
use quote::quote;
use syn::{Error, Result, parse_quote};

/// Memoize a function with a single-slot cache.
///
/// The function's result is reused as long as it is called with arguments
/// that are shallowly equal to the previous call's. Each thread has its own
/// slot. Arguments must be owned values implementing `Shallow + Clone`; use
/// `Rc` or `Arc` to pass shared data by identity.
///
/// ```ignore
/// #[memoize]
/// fn describe(width: u32, height: u32) -> String {
///     format!("The image is {width}x{height} pixels.")
/// }
/// ```
#[proc_macro_attribute]
pub fn memoize(_: TokenStream, stream: TokenStream) -> TokenStream {
    let func = syn::parse_macro_input!(stream as syn::ItemFn);
    memoize::expand(func)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Compose extractors and a combiner into a selector.
///
/// The last expression is the combiner, all preceding ones are extractors.
/// The combiner receives one positional argument per extractor.
///
/// ```ignore
/// struct State { a: i32, b: i32 }
///
/// let sum = create_selector!(
///     |s: &Rc<State>| s.a,
///     |s: &Rc<State>| s.b,
///     |a: i32, b: i32| a + b,
/// );
/// assert_eq!(sum.select(&Rc::new(State { a: 1, b: 2 })), 3);
/// ```
#[proc_macro]
pub fn create_selector(stream: TokenStream) -> TokenStream {
    let funcs = syn::parse_macro_input!(stream with select::parse);
    select::expand(funcs)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
