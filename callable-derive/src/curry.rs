//! Implementation of the `curry!` procedural macro.
//!
//! The macro turns a multi-argument closure or function into a right-nested
//! chain of `callable::Callable` values.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `curry!(|a, b| body)`
//! 2. Function name + arity form: `curry!(function_name, arity)`
//!
//! # Generated Code Structure
//!
//! For a closure `|a, b, c| body`, the macro generates:
//!
//! ```text
//! {
//!     let __callable_function = Rc::new(|a, b, c| body);
//!     Callable::new(move |__callable_argument_0| {
//!         let __callable_function = Rc::clone(&__callable_function);
//!         let __callable_argument_0 = Rc::new(__callable_argument_0);
//!         Callable::new(move |__callable_argument_1| {
//!             let __callable_function = Rc::clone(&__callable_function);
//!             let __callable_argument_0 = Rc::clone(&__callable_argument_0);
//!             let __callable_argument_1 = Rc::new(__callable_argument_1);
//!             Callable::new(move |__callable_argument_2| {
//!                 __callable_function(
//!                     Rc::unwrap_or_clone(Rc::clone(&__callable_argument_0)),
//!                     Rc::unwrap_or_clone(Rc::clone(&__callable_argument_1)),
//!                     __callable_argument_2,
//!                 )
//!             })
//!         })
//!     })
//! }
//! ```
//!
//! Every step of the chain is a `callable::Callable`, not a bare closure: the
//! outermost value and every partial application alike. A partially applied
//! `curry!` result can therefore be invoked many times, piped, composed or
//! handed to `flip` like any other `Callable`.
//!
//! Captured arguments are shared through `Rc` and only cloned when the final
//! argument arrives, so argument types other than the last need `Clone`. The
//! function itself is shared by every partial application.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Lit, Token, spanned::Spanned};

enum CurryInput {
    Closure(ExprClosure),
    FunctionWithArity { function: ExprPath, arity: usize },
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    match parse_curry_input(input) {
        Ok(CurryInput::Closure(closure)) => generate_curry_from_closure(&closure),
        Ok(CurryInput::FunctionWithArity { function, arity }) => {
            generate_callable_chain(arity, &quote! { #function })
        }
        Err(error) => error.to_compile_error(),
    }
}

fn parse_curry_input(input: TokenStream) -> syn::Result<CurryInput> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions: Punctuated<Expr, Token![,]> = syn::parse::Parser::parse2(parser, input)?;
    let mut iterator = expressions.into_iter();

    match (iterator.next(), iterator.next(), iterator.next()) {
        (Some(single), None, None) => parse_single_expression(single),
        (Some(function), Some(arity), None) => parse_function_with_arity(function, arity),
        _ => Err(syn::Error::new(
            Span::call_site(),
            "curry! requires a closure or function name with arity",
        )),
    }
}

fn parse_single_expression(expression: Expr) -> syn::Result<CurryInput> {
    match expression {
        Expr::Closure(closure) => Ok(CurryInput::Closure(closure)),
        Expr::Path(path) => Err(syn::Error::new(
            path.span(),
            "curry! with function name requires arity: curry!(function_name, 2)",
        )),
        other => Err(syn::Error::new(
            other.span(),
            "curry! requires a closure or function name with arity",
        )),
    }
}

fn parse_function_with_arity(first: Expr, second: Expr) -> syn::Result<CurryInput> {
    let function = match first {
        Expr::Path(path) => path,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "expected a function name or path",
            ));
        }
    };

    let arity = match second {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal_integer),
            ..
        }) => literal_integer.base10_parse::<usize>()?,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "curry! expected an integer literal for arity",
            ));
        }
    };

    if arity < 2 {
        return Err(syn::Error::new(
            function.span(),
            "curry! requires a function with at least 2 arguments",
        ));
    }

    Ok(CurryInput::FunctionWithArity { function, arity })
}

fn generate_curry_from_closure(closure: &ExprClosure) -> TokenStream {
    let argument_count = closure.inputs.len();

    if argument_count < 2 {
        return syn::Error::new(
            closure.span(),
            "curry! requires a function with at least 2 arguments",
        )
        .to_compile_error();
    }

    generate_callable_chain(argument_count, &quote! { #closure })
}

fn generate_callable_chain(
    argument_count: usize,
    function_expression: &TokenStream,
) -> TokenStream {
    let argument_identifiers: Vec<_> = (0..argument_count)
        .map(|index| format_ident!("__callable_argument_{}", index))
        .collect();

    let final_arguments = argument_identifiers
        .iter()
        .enumerate()
        .map(|(index, identifier)| {
            if index + 1 < argument_count {
                quote! {
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#identifier))
                }
            } else {
                quote! { #identifier }
            }
        });

    let function_call = quote! { __callable_function(#(#final_arguments),*) };
    let chain = build_callable_chain(&argument_identifiers, function_call);

    quote! {
        {
            let __callable_function = ::std::rc::Rc::new(#function_expression);
            #chain
        }
    }
}

fn build_callable_chain(
    argument_identifiers: &[proc_macro2::Ident],
    innermost_body: TokenStream,
) -> TokenStream {
    let last_index = argument_identifiers.len() - 1;
    let mut current_body = innermost_body;

    for (index, identifier) in argument_identifiers.iter().enumerate().rev() {
        current_body = if index == last_index {
            quote! {
                ::callable::Callable::new(move |#identifier| { #current_body })
            }
        } else {
            let clones_before = argument_identifiers[..index].iter().map(|previous| {
                quote! {
                    let #previous = ::std::rc::Rc::clone(&#previous);
                }
            });

            quote! {
                ::callable::Callable::new(move |#identifier| {
                    let __callable_function = ::std::rc::Rc::clone(&__callable_function);
                    #(#clones_before)*
                    let #identifier = ::std::rc::Rc::new(#identifier);
                    #current_body
                })
            }
        };
    }

    current_body
}
