use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Generate a color record from a struct with exactly three channel fields.
///
/// The struct gets a trailing `alpha` field, common derives, a `new`
/// constructor, a `CHANNELS` table (each field name in PascalCase must be a
/// `Channel` variant) and `from_values`, which validates a raw value list.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each channel of the color.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_types = input
        .fields
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];
    let ty1 = &field_types[0];
    let ty2 = &field_types[1];
    let ty3 = &field_types[2];

    // Each field maps onto the validator's channel kind of the same name.
    let channels = field_names
        .iter()
        .map(|name| {
            let name = name
                .as_ref()
                .map(|n| n.to_string())
                .unwrap_or_default()
                .to_case(Case::Pascal);
            syn::Ident::new(name.as_str(), Span::call_site())
        })
        .collect::<Vec<_>>();
    let channel1 = &channels[0];
    let channel2 = &channels[1];
    let channel3 = &channels[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    if let syn::Fields::Named(ref mut named) = input.fields {
        named.named.push(
            syn::Field::parse_named
                .parse2(syn::parse_quote! {
                    /// The alpha channel of the color, in the range [0, 1].
                    pub alpha: crate::color::Component
                })
                .unwrap(),
        );
    }

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// The channel kind of each of the three color fields, in order.
            pub const CHANNELS: [crate::validate::Channel; 3] = [
                crate::validate::Channel::#channel1,
                crate::validate::Channel::#channel2,
                crate::validate::Channel::#channel3,
            ];

            /// Create a new record from already validated channels.
            pub const fn new(
                #field1: #ty1,
                #field2: #ty2,
                #field3: #ty3,
                alpha: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    alpha,
                }
            }

            /// Convert the three color fields into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(
                    crate::color::Component::from(self.#field1),
                    crate::color::Component::from(self.#field2),
                    crate::color::Component::from(self.#field3),
                )
            }

            /// Build a record from a list of 3 or 4 raw values. Every value
            /// is validated for its channel; a missing alpha defaults to 1.
            pub fn from_values(
                values: &[crate::validate::Value<'_>],
            ) -> crate::error::Result<Self> {
                if values.len() != 3 && values.len() != 4 {
                    return Err(crate::error::Error::InvalidValues {
                        space: <Self as crate::color::HasSpace>::SPACE,
                        input: crate::validate::display_values(values),
                    });
                }

                Ok(Self::new(
                    crate::validate::validate(Self::CHANNELS[0], &values[0])? as #ty1,
                    crate::validate::validate(Self::CHANNELS[1], &values[1])? as #ty2,
                    crate::validate::validate(Self::CHANNELS[2], &values[2])? as #ty3,
                    crate::validate::validate_alpha(values.get(3))?,
                ))
            }

            /// Validate every channel of the record again, e.g. one built by
            /// hand through its public fields.
            pub fn validated(&self) -> crate::error::Result<Self> {
                Self::from_values(&[
                    crate::validate::Value::Number(crate::color::Component::from(self.#field1)),
                    crate::validate::Value::Number(crate::color::Component::from(self.#field2)),
                    crate::validate::Value::Number(crate::color::Component::from(self.#field3)),
                    crate::validate::Value::Number(self.alpha),
                ])
            }
        }

        impl From<#struct_name> for crate::color::Components {
            fn from(value: #struct_name) -> Self {
                value.to_components()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
