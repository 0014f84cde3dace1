//! Implementation of the `#[derive(Tagged)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Ident, Variant, parse_macro_input};

/// Main implementation of the Tagged derive macro.
pub fn derive_tagged_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = expand(&input).unwrap_or_else(syn::Error::into_compile_error);

    TokenStream::from(expanded)
}

/// How a variant's fields are handed to its handler.
struct VariantShape {
    /// Pattern matching the variant and binding its fields.
    pattern: TokenStream2,
    /// Expression passed to the handler.
    payload: TokenStream2,
    /// Type of that expression.
    payload_type: TokenStream2,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let data_enum = match &input.data {
        Data::Enum(data_enum) => data_enum,
        Data::Struct(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Tagged can only be derived for enums, not structs.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(name, "Tagged cannot be derived for unions."));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Tagged cannot be derived for generic enums.",
        ));
    }

    if data_enum.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "Tagged requires at least one variant to dispatch on.",
        ));
    }

    let variants: Vec<&Variant> = data_enum.variants.iter().collect();

    let tagged_impl = generate_tagged_impl(name, &variants);
    let dispatch_items = generate_dispatch(input, &variants);

    Ok(quote! {
        #tagged_impl
        #dispatch_items
    })
}

/// Generates the `Tagged` impl: the kind list and the per-value kind.
fn generate_tagged_impl(name: &Ident, variants: &[&Variant]) -> TokenStream2 {
    let kinds: Vec<String> = variants.iter().map(|variant| variant.ident.to_string()).collect();

    let arms = variants.iter().zip(&kinds).map(|(variant, kind)| {
        let variant_name = &variant.ident;
        match &variant.fields {
            Fields::Unit => quote! { Self::#variant_name => #kind },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #kind },
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #kind },
        }
    });

    quote! {
        impl ::fp_lessons::control::Tagged for #name {
            const KINDS: &'static [&'static str] = &[#(#kinds),*];

            fn kind(&self) -> &'static str {
                match self {
                    #(#arms,)*
                }
            }
        }
    }
}

/// Generates the handlers record and the `Dispatch` impl.
fn generate_dispatch(input: &DeriveInput, variants: &[&Variant]) -> TokenStream2 {
    let name = &input.ident;
    let visibility = &input.vis;
    let handlers_name = format_ident!("{}Handlers", name);

    let handler_types: Vec<Ident> = variants
        .iter()
        .map(|variant| format_ident!("{}Handler", variant.ident))
        .collect();
    let field_names: Vec<Ident> = variants
        .iter()
        .map(|variant| handler_field_name(variant))
        .collect();
    let shapes: Vec<VariantShape> = variants.iter().map(|variant| variant_shape(variant)).collect();

    let record_doc = format!("One handler per kind of [`{name}`], used with `Dispatch`.");
    let field_docs = variants
        .iter()
        .map(|variant| format!("Handles `{name}::{}`.", variant.ident));

    let bounds = handler_types.iter().zip(&shapes).map(|(handler_type, shape)| {
        let payload_type = &shape.payload_type;
        quote! { #handler_type: ::core::ops::FnOnce(#payload_type) -> DispatchOutput }
    });

    let arms = field_names.iter().zip(&shapes).map(|(field_name, shape)| {
        let pattern = &shape.pattern;
        let payload = &shape.payload;
        quote! { #pattern => (handlers.#field_name)(#payload) }
    });

    quote! {
        #[doc = #record_doc]
        #[derive(Clone, Copy)]
        #visibility struct #handlers_name<#(#handler_types),*> {
            #(
                #[doc = #field_docs]
                pub #field_names: #handler_types,
            )*
        }

        impl<DispatchOutput, #(#handler_types),*>
            ::fp_lessons::control::Dispatch<#handlers_name<#(#handler_types),*>> for #name
        where
            #(#bounds,)*
        {
            type Output = DispatchOutput;

            fn dispatch(self, handlers: #handlers_name<#(#handler_types),*>) -> DispatchOutput {
                match self {
                    #(#arms,)*
                }
            }
        }
    }
}

/// Works out the pattern, payload and payload type for a single variant.
fn variant_shape(variant: &Variant) -> VariantShape {
    let variant_name = &variant.ident;

    match &variant.fields {
        // Unit variant: the handler receives `()`
        Fields::Unit => VariantShape {
            pattern: quote! { Self::#variant_name },
            payload: quote! { () },
            payload_type: quote! { () },
        },

        // Tuple variant with one field: the handler receives the field
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            VariantShape {
                pattern: quote! { Self::#variant_name(field_0) },
                payload: quote! { field_0 },
                payload_type: quote! { #field_type },
            }
        }

        // Other tuple variants: the handler receives a tuple
        Fields::Unnamed(fields) => {
            let bindings: Vec<Ident> =
                (0..fields.unnamed.len()).map(|index| format_ident!("field_{}", index)).collect();
            let field_types = fields.unnamed.iter().map(|field| &field.ty);
            VariantShape {
                pattern: quote! { Self::#variant_name(#(#bindings),*) },
                payload: quote! { (#(#bindings,)*) },
                payload_type: quote! { (#(#field_types,)*) },
            }
        }

        // Struct variant: the handler receives its fields as a tuple
        Fields::Named(fields) => {
            let field_names = fields.named.iter().filter_map(|field| field.ident.as_ref());
            let bindings: Vec<Ident> =
                (0..fields.named.len()).map(|index| format_ident!("field_{}", index)).collect();
            let field_types = fields.named.iter().map(|field| &field.ty);
            VariantShape {
                pattern: quote! { Self::#variant_name { #(#field_names: #bindings),* } },
                payload: quote! { (#(#bindings,)*) },
                payload_type: quote! { (#(#field_types,)*) },
            }
        }
    }
}

/// Field of the handlers record for `variant`: its name in snake case.
///
/// Keywords become raw identifiers (`Type` -> `r#type`). The few keywords
/// that cannot be raw get a trailing underscore (`Crate` -> `crate_`).
fn handler_field_name(variant: &Variant) -> Ident {
    let snake_case = to_snake_case(&variant.ident.to_string());

    if syn::parse_str::<Ident>(&snake_case).is_ok() {
        return Ident::new(&snake_case, variant.ident.span());
    }

    match snake_case.as_str() {
        "crate" | "self" | "super" => format_ident!("{}_", snake_case, span = variant.ident.span()),
        _ => Ident::new_raw(&snake_case, variant.ident.span()),
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous_char = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser",
                // "Base64Decode" -> "base64_decode"
                if previous_char.is_lowercase()
                    || previous_char.is_ascii_digit()
                    || (previous_char.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.push(character.to_lowercase().next().unwrap_or(character));
        } else {
            result.push(character);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use syn::parse_quote;

    #[rstest]
    #[case("AccountFrozen", "account_frozen")]
    #[case("NotEnoughBalance", "not_enough_balance")]
    #[case("Base64Decode", "base64_decode")]
    #[case("JSONParse", "json_parse")]
    #[case("A", "a")]
    fn to_snake_case_converts_variant_names(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[rstest]
    fn expand_names_the_handlers_record_after_the_enum() {
        let input: DeriveInput = parse_quote! {
            pub enum PayError {
                AccountFrozen,
                NotEnoughBalance { amount: u64, balance: u64 },
            }
        };

        let generated = expand(&input).expect("enum expands").to_string();

        assert!(generated.contains("pub struct PayErrorHandlers"));
        assert!(generated.contains("pub account_frozen : AccountFrozenHandler"));
        assert!(generated.contains("pub not_enough_balance : NotEnoughBalanceHandler"));
        assert!(generated.contains("\"AccountFrozen\" , \"NotEnoughBalance\""));
    }

    #[rstest]
    fn expand_escapes_keyword_field_names() {
        let input: DeriveInput = parse_quote! {
            pub enum Token {
                Type,
                Match(u8),
                Crate,
            }
        };

        let generated = expand(&input).expect("enum expands").to_string();

        assert!(generated.contains("pub r#type : TypeHandler"));
        assert!(generated.contains("pub r#match : MatchHandler"));
        assert!(generated.contains("pub crate_ : CrateHandler"));
        assert!(syn::parse_str::<syn::File>(&generated).is_ok());
    }

    #[rstest]
    fn expand_rejects_structs() {
        let input: DeriveInput = parse_quote! {
            struct Account { balance: u64 }
        };
        let error = expand(&input).err().map(|error| error.to_string());
        assert_eq!(
            error.as_deref(),
            Some("Tagged can only be derived for enums, not structs.")
        );
    }

    #[rstest]
    fn expand_rejects_generic_enums() {
        let input: DeriveInput = parse_quote! {
            enum Wrapper<T> { Value(T) }
        };
        assert!(expand(&input).is_err());
    }

    #[rstest]
    fn expand_rejects_empty_enums() {
        let input: DeriveInput = parse_quote! {
            enum Never {}
        };
        assert!(expand(&input).is_err());
    }

    proptest! {
        #[test]
        fn to_snake_case_output_has_no_uppercase(input in "[A-Z][a-zA-Z0-9]{0,20}") {
            let output = to_snake_case(&input);
            prop_assert!(!output.chars().any(char::is_uppercase));
            prop_assert!(!output.starts_with('_'));
        }
    }
}
