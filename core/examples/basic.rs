use math::{radix, Polynomial};
use rootpoly_core::{select_roots, RootRecord};
use std::num::NonZeroUsize;

fn main() {
    let records = vec![
        RootRecord::new(1, 16, "-ff"),
        RootRecord::new(2, 2, "1010"),
        RootRecord::new(4, 10, "1_000"),
    ];
    let k = NonZeroUsize::new(3).expect("k is positive");

    let roots = select_roots(records, k).expect("all records decode");
    for (index, value) in roots.iter() {
        println!(
            "root #{index}: {value} (base 16: {})",
            radix::encode(value, 16).expect("16 is a supported base")
        );
    }

    let polynomial =
        Polynomial::from_roots(roots.values()).expect("coefficients fit in i64");
    println!("p(x) = {polynomial}");
    for &root in roots.values() {
        println!("p({root}) = {:?}", polynomial.evaluate(root));
    }
}
