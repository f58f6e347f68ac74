// perflog-macro/src/lib.rs
extern crate proc_macro;
use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::Parse, punctuated::Punctuated, spanned::Spanned, Error, Expr, ExprLit, ItemFn, Lit,
    LitStr, Meta, Token,
};

// Parsed `#[log_time(...)]` options
struct LogTimeArgs {
    level: Option<proc_macro2::Ident>,
    print_return: bool,
}

// Maps a level name to the matching `perflog::Level` constant
fn parse_level(lit: &LitStr) -> syn::Result<proc_macro2::Ident> {
    let name = match lit.value().to_ascii_lowercase().as_str() {
        "trace" => "TRACE",
        "debug" => "DEBUG",
        "info" => "INFO",
        "warn" => "WARN",
        "error" => "ERROR",
        _ => {
            return Err(create_error(
                lit.span(),
                "Unknown level name",
                Some("Expected one of \"trace\", \"debug\", \"info\", \"warn\", \"error\""),
            ))
        }
    };
    Ok(proc_macro2::Ident::new(name, lit.span()))
}

impl Parse for LogTimeArgs {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut args = LogTimeArgs {
            level: None,
            print_return: false,
        };
        for meta in Punctuated::<Meta, Token![,]>::parse_terminated(input)? {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("level") => {
                    if let Expr::Lit(ExprLit {
                        lit: Lit::Str(lit), ..
                    }) = &nv.value
                    {
                        args.level = Some(parse_level(lit)?);
                    } else {
                        return Err(create_error(
                            nv.value.span(),
                            "Level must be a string literal",
                            Some("Write `level = \"debug\"`"),
                        ));
                    }
                }
                Meta::Path(path) if path.is_ident("print_return") => {
                    args.print_return = true;
                }
                other => {
                    return Err(create_error(
                        other.span(),
                        "Unsupported log_time option",
                        Some("Expected `level = \"...\"` and/or `print_return`"),
                    ))
                }
            }
        }
        Ok(args)
    }
}

// Helper function to create decorated error messages
fn create_error(span: proc_macro2::Span, message: &str, help: Option<&str>) -> Error {
    let mut err = Error::new(span, message);
    if let Some(help_msg) = help {
        err.combine(Error::new(span, help_msg));
    }
    err
}

/// Times every invocation of the attributed function and logs one record
/// reporting elapsed process CPU time.
///
/// The function body is moved into a closure executed under
/// `perflog::perf_log_named`, so the original arguments, return value, and
/// panics all pass through unchanged. The operation name logged with each
/// record is the function's module path plus its name, resolved where the
/// function is defined.
///
/// # Options
///
/// * `level = "..."` - level the timing record is emitted at (`"trace"`,
///   `"debug"`, `"info"`, `"warn"`, or `"error"`; default `"info"`)
/// * `print_return` - include the return value in the record instead of the
///   `<NULL>` placeholder
///
/// # Examples
///
/// Basic usage:
/// ```rust,ignore
/// use perflog::log_time;
///
/// #[log_time]
/// fn add(x: i32, y: i32) -> i32 {
///     x + y
/// }
///
/// assert_eq!(add(2, 3), 5);
/// ```
///
/// With options:
/// ```rust,ignore
/// use perflog::log_time;
///
/// #[log_time(level = "debug", print_return)]
/// fn multiply(x: i32, y: i32) -> i32 {
///     x * y
/// }
/// ```
///
/// On methods:
/// ```rust,ignore
/// use perflog::log_time;
///
/// struct Calculator {
///     base: f64,
/// }
///
/// impl Calculator {
///     #[log_time]
///     pub fn compute(&self, factor: f64) -> f64 {
///         self.base * factor
///     }
/// }
/// ```
///
/// The return type must implement `Debug` so the value can be rendered when
/// `print_return` is set.
#[proc_macro_attribute]
pub fn log_time(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match syn::parse::<LogTimeArgs>(attr) {
        Ok(args) => args,
        Err(e) => return TokenStream::from(e.to_compile_error()),
    };

    let input_fn = match syn::parse::<ItemFn>(item) {
        Ok(f) => f,
        Err(e) => return TokenStream::from(e.to_compile_error()),
    };

    // Validate function signature
    if input_fn.sig.constness.is_some() {
        return TokenStream::from(
            create_error(
                input_fn.sig.constness.span(),
                "Cannot decorate const functions",
                Some("The log_time attribute cannot be used with const functions"),
            )
            .to_compile_error(),
        );
    }
    if input_fn.sig.asyncness.is_some() {
        return TokenStream::from(
            create_error(
                input_fn.sig.asyncness.span(),
                "Cannot decorate async functions",
                Some("log_time times a synchronous call; wrap the future's execution with perflog::perf_log_named instead"),
            )
            .to_compile_error(),
        );
    }

    let vis = &input_fn.vis;
    let sig = &input_fn.sig;
    let body = &input_fn.block;
    let fn_name = &input_fn.sig.ident;

    // Construction-time configuration from the attribute options
    let mut config = quote! { ::perflog::PerfConfig::default() };
    if let Some(level) = &args.level {
        config = quote! { #config.with_level(::perflog::Level::#level) };
    }
    if args.print_return {
        config = quote! { #config.with_print_return() };
    }

    let output = quote! {
        #vis #sig {
            ::perflog::perf_log_named(
                concat!(module_path!(), "::", stringify!(#fn_name)),
                &#config,
                || #body,
            )
        }
    };

    output.into()
}
