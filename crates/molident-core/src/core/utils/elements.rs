use phf::{Set, phf_set};

static ELEMENT_SYMBOLS: Set<&'static str> = phf_set! {
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr",
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn",
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th",
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm",
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
};

pub fn is_element_symbol(symbol: &str) -> bool {
    ELEMENT_SYMBOLS.contains(symbol.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_element_symbol_recognizes_common_elements() {
        assert!(is_element_symbol("H"));
        assert!(is_element_symbol("O"));
        assert!(is_element_symbol("Fe"));
        assert!(is_element_symbol("Og"));
    }

    #[test]
    fn is_element_symbol_trims_whitespace_and_is_case_sensitive() {
        assert!(is_element_symbol(" C "));
        assert!(!is_element_symbol("FE"));
        assert!(!is_element_symbol("h"));
    }

    #[test]
    fn is_element_symbol_rejects_non_elements() {
        assert!(!is_element_symbol("Xx"));
        assert!(!is_element_symbol(""));
        assert!(!is_element_symbol("D2"));
    }
}
