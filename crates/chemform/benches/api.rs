use chemform::{Atom, ElementTable, Formula, Massive, Molecule, atoms::element_table};
use divan::{AllocProfiler, black_box};
use once_cell::sync::Lazy;

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

const TABLE_TEXT: &str = element_table::DEFAULT_TABLE;
const FORMULAS: [&str; 6] = [
    "C2H5NO2",
    "C5H9NO2",
    "C7H14N2O4",
    "C5H11NO2S",
    "CH3CH2OH",
    "C9H12ClNO3",
];

static DB: Lazy<ElementTable> = Lazy::new(ElementTable::default);

static PARSED: Lazy<Vec<Formula>> = Lazy::new(|| {
    FORMULAS
        .into_iter()
        .map(|formula| Formula::new(&DB, formula).unwrap())
        .collect()
});

// HO-CH2-CH2-OH
static ETHYLENE_GLYCOL: Lazy<Molecule> = Lazy::new(|| {
    let atoms = [
        Atom::new(&DB, "O", 1, 0).unwrap(),
        Atom::new(&DB, "C", 2, 0).unwrap(),
        Atom::new(&DB, "C", 2, 0).unwrap(),
        Atom::new(&DB, "O", 1, 0).unwrap(),
    ];
    Molecule::new(&DB, atoms, [(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap()
});

fn main() {
    Lazy::force(&DB);
    Lazy::force(&PARSED);
    Lazy::force(&ETHYLENE_GLYCOL);
    divan::main();
}

mod formulae {
    use super::*;

    #[divan::bench]
    fn build_element_table() -> ElementTable {
        ElementTable::new("element_table.txt", TABLE_TEXT).unwrap()
    }

    #[divan::bench]
    fn parse_formulae() {
        for formula in FORMULAS {
            black_box(Formula::new(&DB, formula).unwrap());
        }
    }

    #[divan::bench]
    fn render_formulae() {
        for formula in PARSED.iter() {
            black_box(formula.render().unwrap());
        }
    }

    #[divan::bench]
    fn calculate_average_masses() {
        for formula in PARSED.iter() {
            black_box(formula.average_mass().unwrap());
        }
    }

    #[divan::bench]
    fn check_containment() {
        let glycine = &PARSED[0];
        for formula in PARSED.iter() {
            black_box(formula.contains(glycine));
        }
    }
}

mod molecules {
    use super::*;

    #[divan::bench]
    fn molecular_formula() -> Formula<'static> {
        ETHYLENE_GLYCOL.formula()
    }

    #[divan::bench]
    fn monoisotopic_mass() {
        black_box(ETHYLENE_GLYCOL.monoisotopic_mass());
    }

    #[divan::bench]
    fn find_path() -> Vec<usize> {
        ETHYLENE_GLYCOL.find_path(0, 3).unwrap()
    }
}
