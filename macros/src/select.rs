use proc_macro2::Span;
use syn::parse::ParseStream;
use syn::punctuated::Punctuated;

use super::*;

/// Selector functions, the combiner last.
pub type Funcs = Punctuated<syn::Expr, syn::Token![,]>;

/// Parse a comma-separated list of functions.
pub fn parse(input: ParseStream) -> Result<Funcs> {
    Funcs::parse_terminated(input)
}

/// Build a selector.
pub fn expand(mut funcs: Funcs) -> Result<proc_macro2::TokenStream> {
    if funcs.len() > 13 {
        bail!(funcs, "at most twelve extractors are supported");
    }

    let Some(combiner) = funcs.pop() else {
        return Err(Error::new(
            Span::call_site(),
            "reselect: expected at least a combiner",
        ));
    };

    let combiner = combiner.into_value();
    let extractors = funcs.iter();

    Ok(quote! {
        ::reselect::internal::create_selector((#(#extractors,)*), #combiner)
    })
}
