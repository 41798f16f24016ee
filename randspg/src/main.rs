use randspg::babel;
use randspg::{atomic_number, AtomStruct, Crystal, LatticeStruct, Radii};

fn main() {
    let lattice = LatticeStruct::new(2.0, 3.0, 4.0, 60.0, 70.0, 80.0);
    let atoms = vec![
        AtomStruct::new(atomic_number!(Na), 0.1, 0.2, 0.3),
        AtomStruct::new(atomic_number!(Cl), 0.6, 0.7, 0.8),
    ];
    let crystal = Crystal::new(lattice, atoms);

    print!("{crystal}");
    println!("volume = {:.5}", f64::from(crystal.volume()));
    println!(
        "min distances ok = {}",
        crystal.check_min_distances(&Radii::new(0.5))
    );
    println!();

    babel::write_poscar(&crystal, "NaCl candidate", &mut std::io::stdout()).unwrap();
}
