//! Derive macro implementation used by `scalars-core`.
//!
//! `scalars-derive` is an implementation detail of this workspace. The `Quantity` derive expands in terms of
//! `crate::Quantity`, `crate::Unit`, `crate::UnitRegistry` and `crate::SiDimensions`, so it is intended to be used by
//! `scalars-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `scalars` instead and use the predefined quantities.
//!
//! # Generated impls
//!
//! For a quantity tag `MyQuantity`, the derive implements:
//!
//! - `crate::Quantity for MyQuantity`, including a process-wide unit registry built once on first use
//! - `crate::AbsoluteQuantity for MyQuantity` when a `relative = ...` pairing is given
//!
//! # Attributes
//!
//! The derive reads a required `#[quantity(...)]` attribute:
//!
//! - `name = "Pressure"`: human-readable quantity name (defaults to the type name)
//! - `dimensions = "kg.m-1.s-2"`: SI exponent vector, dot-separated `<symbol><exponent>` terms
//! - `units = [PASCAL, KILOPASCAL, ...]`: every unit of the quantity; the first entry is the base unit
//! - `relative = Temperature`: optional relative quantity for an absolute quantity

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, ExprArray, Ident, LitStr, Token, Type,
};

/// Symbols of the SI exponent vector, in storage order.
const SI_SYMBOLS: [&str; 9] = ["rad", "sr", "kg", "m", "s", "A", "K", "mol", "cd"];

/// Derive `crate::Quantity` (and optionally `crate::AbsoluteQuantity`) for a quantity tag type.
///
/// The derive must be paired with a `#[quantity(...)]` attribute providing at least `dimensions` and `units`.
///
/// This macro is intended for use by `scalars-core`.
#[proc_macro_derive(Quantity, attributes(quantity))]
pub fn derive_quantity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_quantity_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_quantity_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let attr = parse_quantity_attribute(&input.attrs)?;

    let display_name = attr
        .name
        .as_ref()
        .map(LitStr::value)
        .unwrap_or_else(|| name.to_string());
    let exponents = parse_dimensions(&attr.dimensions)?;
    let exponents = exponents.iter();

    let units: Vec<_> = attr.units.elems.iter().collect();
    let base = units.first().ok_or_else(|| {
        syn::Error::new_spanned(&attr.units, "a quantity needs at least one unit")
    })?;

    let absolute = attr.relative.as_ref().map(|relative| {
        quote! {
            impl crate::AbsoluteQuantity for #name {
                type Relative = #relative;
            }
        }
    });

    let expanded = quote! {
        impl crate::Quantity for #name {
            const NAME: &'static str = #display_name;
            const DIMENSIONS: crate::SiDimensions = crate::SiDimensions::new([#(#exponents),*]);
            const BASE: crate::Unit<Self> = #base;
            const UNITS: &'static [crate::Unit<Self>] = &[#(#units),*];

            fn registry() -> &'static crate::UnitRegistry<Self> {
                static REGISTRY: ::once_cell::sync::Lazy<crate::UnitRegistry<#name>> =
                    ::once_cell::sync::Lazy::new(|| {
                        crate::UnitRegistry::new(<#name as crate::Quantity>::UNITS)
                    });
                &REGISTRY
            }
        }

        #absolute
    };

    Ok(expanded)
}

/// Parsed contents of the `#[quantity(...)]` attribute.
struct QuantityAttribute {
    name: Option<LitStr>,
    dimensions: LitStr,
    units: ExprArray,
    relative: Option<Type>,
}

impl Parse for QuantityAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut dimensions: Option<LitStr> = None;
        let mut units: Option<ExprArray> = None;
        let mut relative: Option<Type> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    name = Some(input.parse()?);
                }
                "dimensions" => {
                    dimensions = Some(input.parse()?);
                }
                "units" => {
                    units = Some(input.parse()?);
                }
                "relative" => {
                    relative = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let dimensions = dimensions.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimensions`")
        })?;
        let units = units
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `units`"))?;

        Ok(QuantityAttribute {
            name,
            dimensions,
            units,
            relative,
        })
    }
}

fn parse_quantity_attribute(attrs: &[Attribute]) -> syn::Result<QuantityAttribute> {
    for attr in attrs {
        if attr.path().is_ident("quantity") {
            return attr.parse_args::<QuantityAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[quantity(...)] attribute",
    ))
}

/// Turns `"kg.m-1.s-2"` into the nine SI exponents at compile time.
fn parse_dimensions(lit: &LitStr) -> syn::Result<[i8; 9]> {
    let text = lit.value();
    let mut exponents = [0i8; 9];

    for term in text.split('.').map(str::trim).filter(|t| !t.is_empty()) {
        let split = term
            .find(|c: char| c == '-' || c == '+' || c.is_ascii_digit())
            .unwrap_or(term.len());
        let (symbol, exponent) = term.split_at(split);

        let index = SI_SYMBOLS
            .iter()
            .position(|s| *s == symbol)
            .ok_or_else(|| {
                syn::Error::new(lit.span(), format!("unknown SI symbol `{}`", symbol))
            })?;
        let exponent: i8 = if exponent.is_empty() {
            1
        } else {
            exponent.parse().map_err(|_| {
                syn::Error::new(lit.span(), format!("invalid exponent in `{}`", term))
            })?
        };

        exponents[index] = exponents[index].checked_add(exponent).ok_or_else(|| {
            syn::Error::new(lit.span(), format!("exponent of `{}` overflows in `{}`", symbol, text))
        })?;
    }

    Ok(exponents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_quantity_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[quantity(name = "Pressure", dimensions = "kg.m-1.s-2", units = [PASCAL, KILOPASCAL])]
            pub enum Pressure {}
        };

        let attr = parse_quantity_attribute(&input.attrs).unwrap();
        assert_eq!(attr.name.unwrap().value(), "Pressure");
        assert_eq!(attr.dimensions.value(), "kg.m-1.s-2");
        assert_eq!(attr.units.elems.len(), 2);
        assert!(attr.relative.is_none());
    }

    #[test]
    fn test_parse_quantity_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub enum Pressure {}
        };

        let result = parse_quantity_attribute(&input.attrs);
        let err = result.err().unwrap();
        assert!(err.to_string().contains("missing #[quantity(...)] attribute"));
    }

    #[test]
    fn test_parse_quantity_attribute_missing_dimensions() {
        let input: DeriveInput = parse_quote! {
            #[quantity(units = [PASCAL])]
            pub enum Pressure {}
        };

        let err = parse_quantity_attribute(&input.attrs).err().unwrap();
        assert!(err
            .to_string()
            .contains("missing required attribute `dimensions`"));
    }

    #[test]
    fn test_parse_quantity_attribute_missing_units() {
        let input: DeriveInput = parse_quote! {
            #[quantity(dimensions = "kg")]
            pub enum Mass {}
        };

        let err = parse_quantity_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `units`"));
    }

    #[test]
    fn test_parse_quantity_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[quantity(dimensions = "kg", units = [KILOGRAM], plural = "masses")]
            pub enum Mass {}
        };

        let err = parse_quantity_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("unknown attribute"));
    }

    #[test]
    fn test_parse_relative_pairing() {
        let tokens = quote! {
            dimensions = "K", units = [KELVIN, DEGREE_CELSIUS], relative = Temperature,
        };
        let attr: QuantityAttribute = syn::parse2(tokens).unwrap();
        assert!(attr.relative.is_some());
    }

    #[test]
    fn test_parse_dimensions_pressure() {
        let lit: LitStr = parse_quote!("kg.m-1.s-2");
        assert_eq!(
            parse_dimensions(&lit).unwrap(),
            [0, 0, 1, -1, -2, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_parse_dimensions_luminous_flux() {
        let lit: LitStr = parse_quote!("cd.sr");
        assert_eq!(parse_dimensions(&lit).unwrap(), [0, 1, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_parse_dimensions_dimensionless() {
        let lit: LitStr = parse_quote!("");
        assert_eq!(parse_dimensions(&lit).unwrap(), [0; 9]);
    }

    #[test]
    fn test_parse_dimensions_repeated_symbol_accumulates() {
        let lit: LitStr = parse_quote!("m.m.m");
        assert_eq!(parse_dimensions(&lit).unwrap()[3], 3);
    }

    #[test]
    fn test_parse_dimensions_unknown_symbol() {
        let lit: LitStr = parse_quote!("kg.ft2");
        let err = parse_dimensions(&lit).err().unwrap();
        assert!(err.to_string().contains("unknown SI symbol `ft`"));
    }

    #[test]
    fn test_parse_dimensions_exponent_overflow() {
        let lit: LitStr = parse_quote!("m100.m100");
        let err = parse_dimensions(&lit).err().unwrap();
        assert!(err.to_string().contains("exponent of `m` overflows"));

        let lit: LitStr = parse_quote!("s-100.s-100");
        assert!(parse_dimensions(&lit).is_err());
    }

    #[test]
    fn test_parse_dimensions_bad_exponent() {
        let lit: LitStr = parse_quote!("m2x");
        assert!(parse_dimensions(&lit).is_err());
    }

    #[test]
    fn test_derive_quantity_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[quantity(dimensions = "m", units = [METER, KILOMETER])]
            pub enum Length {}
        };

        let code = derive_quantity_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Quantity for Length"));
        assert!(code.contains("const NAME : & 'static str = \"Length\""));
        assert!(code.contains("const BASE : crate :: Unit < Self > = METER"));
        assert!(code.contains("static REGISTRY"));
        assert!(!code.contains("AbsoluteQuantity"));
    }

    #[test]
    fn test_derive_quantity_impl_absolute() {
        let input: DeriveInput = parse_quote! {
            #[quantity(name = "Position", dimensions = "m", units = [METER], relative = Length)]
            pub enum Position {}
        };

        let code = derive_quantity_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: AbsoluteQuantity for Position"));
        assert!(code.contains("type Relative = Length"));
    }

    #[test]
    fn test_derive_quantity_impl_empty_units() {
        let input: DeriveInput = parse_quote! {
            #[quantity(dimensions = "m", units = [])]
            pub enum Length {}
        };

        let err = derive_quantity_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
