use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::parse::Parser;

/// Generate the boilerplate for an integer color model.
///
/// Every field is a channel and must carry a `#[max(N)]` attribute with the
/// inclusive upper bound of the channel. The macro emits the struct, a
/// `<Model>Channel` enum naming the channels, a clamping constructor and
/// accessors to read and replace a single channel.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Models must use named fields, one for each channel of the color.")
        }
        .into();
    };

    if named.named.is_empty() {
        return quote! {
            compile_error!("Models must have at least one channel.")
        }
        .into();
    }

    let mut names = vec![];
    let mut types = vec![];
    let mut maxes = vec![];

    for field in named.named.iter_mut() {
        let Some(max) = field
            .attrs
            .iter()
            .find(|a| a.path().is_ident("max"))
            .map(|a| a.parse_args::<syn::LitInt>())
        else {
            return quote! {
                compile_error!("Every channel needs a #[max(..)] attribute.")
            }
            .into();
        };

        let max = match max.and_then(|lit| lit.base10_parse::<u32>()) {
            Ok(max) => max,
            Err(err) => return err.to_compile_error().into(),
        };

        field.attrs.retain(|a| !a.path().is_ident("max"));
        // Channels are always public.
        field.vis = syn::Visibility::Public(Default::default());

        names.push(field.ident.clone().expect("named field"));
        types.push(field.ty.clone());
        maxes.push(max);
    }

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        })
        .expect("valid derive attributes");
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let channel_name = format_ident!("{}Channel", struct_name);
    let channel_doc = format!("Names a single channel of [`{}`].", struct_name);
    let count = names.len();

    let variants = names
        .iter()
        .map(|n| syn::Ident::new(&n.to_string().to_case(Case::Pascal), Span::call_site()))
        .collect::<Vec<_>>();
    let variant_docs = names
        .iter()
        .map(|n| format!("The `{}` channel.", n))
        .collect::<Vec<_>>();
    let labels = names.iter().map(|n| n.to_string()).collect::<Vec<_>>();
    let limits = maxes
        .iter()
        .map(|m| syn::LitInt::new(&m.to_string(), Span::call_site()))
        .collect::<Vec<_>>();

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new color, clamping every channel into its range.
            #[allow(unused_comparisons, clippy::absurd_extreme_comparisons)]
            pub fn new(#(#names: #types),*) -> Self {
                Self {
                    #(#names: if #names > #limits { #limits } else { #names },)*
                }
            }

            /// Return all channels in declaration order.
            pub fn channels(&self) -> [u32; #count] {
                [#(u32::from(self.#names)),*]
            }

            /// Return the value of a single channel.
            pub fn get(&self, channel: #channel_name) -> u32 {
                match channel {
                    #(#channel_name::#variants => u32::from(self.#names),)*
                }
            }

            /// Return a copy of this color with one channel replaced. The value
            /// is clamped into the range of the channel.
            pub fn with(mut self, channel: #channel_name, value: u32) -> Self {
                let value = value.min(channel.max());
                match channel {
                    #(#channel_name::#variants => self.#names = value as #types,)*
                }
                self
            }
        }

        impl From<[u32; #count]> for #struct_name {
            fn from(value: [u32; #count]) -> Self {
                let mut model = Self::default();
                for (channel, v) in #channel_name::ALL.into_iter().zip(value) {
                    model = model.with(channel, v);
                }
                model
            }
        }

        #[doc = #channel_doc]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum #channel_name {
            #(
                #[doc = #variant_docs]
                #variants,
            )*
        }

        impl #channel_name {
            /// Every channel in declaration order.
            pub const ALL: [Self; #count] = [#(Self::#variants),*];

            /// The lowercase name of the channel, as used by input fields.
            pub fn name(&self) -> &'static str {
                match self {
                    #(Self::#variants => #labels,)*
                }
            }

            /// The inclusive upper bound of the channel.
            pub fn max(&self) -> u32 {
                match self {
                    #(Self::#variants => #limits,)*
                }
            }
        }

        impl std::str::FromStr for #channel_name {
            type Err = crate::UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    #(#labels => Ok(Self::#variants),)*
                    _ => Err(crate::UnknownName(s.to_owned())),
                }
            }
        }

        impl std::fmt::Display for #channel_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
