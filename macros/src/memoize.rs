use super::*;

/// Memoize a function.
pub fn expand(mut func: syn::ItemFn) -> Result<proc_macro2::TokenStream> {
    if let Some(param) = func.sig.generics.params.first() {
        bail!(param, "memoized functions cannot be generic");
    }

    if let Some(asyncness) = &func.sig.asyncness {
        bail!(asyncness, "async functions are not supported");
    }

    let mut args = vec![];
    let mut types = vec![];
    for input in &func.sig.inputs {
        let typed = match input {
            syn::FnArg::Typed(typed) => typed,
            syn::FnArg::Receiver(_) => {
                bail!(input, "methods are not supported")
            }
        };

        let name = match typed.pat.as_ref() {
            syn::Pat::Ident(syn::PatIdent {
                by_ref: None,
                mutability: None,
                ident,
                subpat: None,
                ..
            }) => ident,
            pat => bail!(pat, "only simple identifiers are supported"),
        };

        let ty = typed.ty.as_ref();
        if let syn::Type::Reference(_) = ty {
            bail!(ty, "arguments must be owned, use `Rc` or `Arc` to share data");
        }

        args.push(name);
        types.push(ty);
    }

    let output: syn::Type = match &func.sig.output {
        syn::ReturnType::Default => parse_quote! { () },
        syn::ReturnType::Type(_, ty) => ty.as_ref().clone(),
    };

    // Construct assertions that the arguments fulfill the necessary bounds.
    let bounds = types.iter().map(|ty| {
        quote! {
            ::reselect::internal::assert_shallow::<#ty>();
        }
    });

    // The cached computation receives the stored arguments by reference and
    // rebinds the parameters from a clone of them.
    let body = &func.block;
    let closure = quote! {
        |__reselect_args: &(#(#types,)*)| {
            let (#(#args,)*) = ::core::clone::Clone::clone(__reselect_args);
            #body
        }
    };

    func.block = parse_quote! { {
        #(#bounds)*
        ::std::thread_local! {
            static __RESELECT_MEMO: ::reselect::internal::Memo<(#(#types,)*), #output> =
                const { ::reselect::internal::Memo::new() };
        }
        __RESELECT_MEMO.with(|__reselect_memo| ::reselect::internal::memoized(
            __reselect_memo,
            (#(#args,)*),
            #closure,
        ))
    } };

    Ok(quote! { #func })
}
