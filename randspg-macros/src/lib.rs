/*
*
* Compile-time helpers for the randspg crates.
* `atomic_number!` resolves an element symbol to its atomic number while the
* code is being compiled, so a typo like `atomic_number!(Nq)` is a build error
* rather than a runtime surprise. The macro expands to a plain `u8` literal;
* it is re-exported to users through `randspg-core`.
*/

use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Ident, Result};

// Symbols indexed by atomic number - 1. Keep in sync with the element table
// in randspg-core/src/element.rs.
static SYMBOLS: [&str; 96] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
];

struct SymbolInput {
    symbol: Ident,
}

impl Parse for SymbolInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let symbol: Ident = input.parse()?;
        if !input.is_empty() {
            return Err(syn::Error::new(
                input.span(),
                "expected a single element symbol, e.g. `atomic_number!(Na)`",
            ));
        }
        Ok(SymbolInput { symbol })
    }
}

#[proc_macro]
pub fn atomic_number(tokens: TokenStream) -> TokenStream {
    let tokens: proc_macro2::TokenStream = tokens.into();
    let input = match syn::parse2::<SymbolInput>(tokens) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error().into(),
    };

    let symbol = input.symbol.to_string();
    match SYMBOLS.iter().position(|s| *s == symbol) {
        Some(idx) => {
            #[allow(clippy::cast_possible_truncation)]
            let z = (idx + 1) as u8;
            quote!(#z).into()
        }
        None => syn::Error::new(
            input.symbol.span(),
            format!("unknown element symbol `{symbol}`"),
        )
        .to_compile_error()
        .into(),
    }
}
