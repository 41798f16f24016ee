use randspg_macros::atomic_number;

#[test]
fn atomic_number() {
    assert_eq!(atomic_number!(H), 1);
    assert_eq!(atomic_number!(Na), 11);
    assert_eq!(atomic_number!(Cl), 17);
    assert_eq!(atomic_number!(Ti), 22);
    // last entry of the table
    assert_eq!(atomic_number!(Cm), 96);
}

#[test]
fn expands_to_u8() {
    let z: u8 = atomic_number!(U);
    assert_eq!(z, 92);
}
