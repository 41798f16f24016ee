/*
 * structure.rs contains the crystal data model.
 * notes:
 * The three value types are constructed once with their final field values and
 * read through accessors; mutation of a crystal's atom list is explicit and
 * by `&mut self`.
 * Lattices are kept in parameter form (lengths in angstrom, angles in
 * degrees). The cell matrix is derived on demand, with the `a` vector on the
 * cartesian x axis and `b` in the xy plane.
 * Constructors are total over numeric input. Fractional coordinates are
 * conventionally in [0, 1) but nothing here enforces that; wrapping is an
 * explicit operation. A default-constructed lattice or crystal has all-zero
 * parameters and zero volume.
 */

use std::fmt;
use std::ops::Add;

use thiserror::Error;
use tracing::warn;

use crate::element::{symbol_from_atomic_number, ElementError, Radii};
use crate::math::{Matrix3, Vector3};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angstrom(pub f64);

impl From<Angstrom> for f64 {
    fn from(value: Angstrom) -> Self {
        value.0
    }
}

impl From<f64> for Angstrom {
    fn from(value: f64) -> Self {
        Angstrom(value)
    }
}

impl Add<Angstrom> for Angstrom {
    type Output = Angstrom;

    fn add(self, rhs: Angstrom) -> Self::Output {
        Angstrom::from(f64::from(self) + f64::from(rhs))
    }
}

/// f64 wrapper for inter-axial angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Degree(pub f64);

impl Degree {
    #[must_use]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl From<Degree> for f64 {
    fn from(value: Degree) -> Self {
        value.0
    }
}

impl From<f64> for Degree {
    fn from(value: f64) -> Self {
        Degree(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FracCoord(pub f64);

impl fmt::Display for FracCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:15.9}", self.0)
    }
}

impl From<FracCoord> for f64 {
    fn from(value: FracCoord) -> Self {
        value.0
    }
}

impl From<f64> for FracCoord {
    fn from(value: f64) -> Self {
        FracCoord(value)
    }
}

/// f64 wrapper for a value with unit of volume (Angstrom ^ 3)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Volume(f64);

impl From<Volume> for f64 {
    fn from(value: Volume) -> Self {
        value.0
    }
}

impl From<f64> for Volume {
    fn from(value: f64) -> Self {
        Volume(value)
    }
}

/// dot product
fn dot(v: &Vector3<f64>, u: &Vector3<f64>) -> f64 {
    v[0] * u[0] + v[1] * u[1] + v[2] * u[2]
}

/// cross product
fn cross(u: &Vector3<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    Vector3::<f64>([
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ])
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrystalError {
    #[error("atom index {index} out of range (crystal has {len} atoms)")]
    AtomIndexOutOfRange { index: usize, len: usize },

    #[error("degenerate lattice, cell matrix is not invertible")]
    DegenerateLattice,

    #[error("crystal has no other atoms to measure against")]
    NoNeighbors,
}

/// One atom: an atomic number and a fractional position.
///
/// # Examples
///
/// ```
/// use randspg_core::{atomic_number, AtomStruct};
///
/// let na = AtomStruct::new(atomic_number!(Na), 0.1, 0.2, 0.3);
/// assert_eq!(na.atomic_num(), 11);
/// assert_eq!(na.x(), 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AtomStruct {
    atomic_num: u8,
    position: Vector3<FracCoord>,
}

impl AtomStruct {
    #[must_use]
    pub fn new(atomic_num: u8, x: f64, y: f64, z: f64) -> Self {
        AtomStruct {
            atomic_num,
            position: Vector3([FracCoord(x), FracCoord(y), FracCoord(z)]),
        }
    }

    #[must_use]
    pub fn atomic_num(&self) -> u8 {
        self.atomic_num
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.position[0].into()
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.position[1].into()
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.position[2].into()
    }

    #[must_use]
    pub fn position(&self) -> Vector3<FracCoord> {
        self.position
    }

    /// # Errors
    /// `UnknownAtomicNumber` if the atomic number is outside the element table.
    pub fn symbol(&self) -> Result<&'static str, ElementError> {
        symbol_from_atomic_number(self.atomic_num)
    }
}

impl fmt::Display for AtomStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} @{}{}{}",
            self.atomic_num, self.position[0], self.position[1], self.position[2]
        )
    }
}

/// Unit-cell geometry in parameter form: edge lengths a, b, c in angstrom and
/// inter-axial angles alpha, beta, gamma in degrees.
///
/// # Examples
///
/// ```
/// use randspg_core::LatticeStruct;
///
/// let latt = LatticeStruct::new(2.0, 3.0, 4.0, 60.0, 70.0, 80.0);
/// assert_eq!(f64::from(latt.a()), 2.0);
/// assert_eq!(f64::from(latt.gamma()), 80.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatticeStruct {
    a: Angstrom,
    b: Angstrom,
    c: Angstrom,
    alpha: Degree,
    beta: Degree,
    gamma: Degree,
}

impl LatticeStruct {
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        LatticeStruct {
            a: Angstrom(a),
            b: Angstrom(b),
            c: Angstrom(c),
            alpha: Degree(alpha),
            beta: Degree(beta),
            gamma: Degree(gamma),
        }
    }

    /// Recover parameters from Cartesian lattice vectors given as the rows of
    /// a 3x3 matrix, in angstrom. Zero-length rows yield NaN angles.
    #[must_use]
    pub fn from_cell_matrix(m: &Matrix3) -> Self {
        let va = Vector3::<f64>(m[0]);
        let vb = Vector3::<f64>(m[1]);
        let vc = Vector3::<f64>(m[2]);

        let length_a = dot(&va, &va).sqrt();
        let length_b = dot(&vb, &vb).sqrt();
        let length_c = dot(&vc, &vc).sqrt();

        let cos_alpha = dot(&vb, &vc) / (length_b * length_c);
        let cos_beta = dot(&va, &vc) / (length_a * length_c);
        let cos_gamma = dot(&va, &vb) / (length_a * length_b);

        LatticeStruct::new(
            length_a,
            length_b,
            length_c,
            cos_alpha.acos().to_degrees(),
            cos_beta.acos().to_degrees(),
            cos_gamma.acos().to_degrees(),
        )
    }

    #[must_use]
    pub fn a(&self) -> Angstrom {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> Angstrom {
        self.b
    }

    #[must_use]
    pub fn c(&self) -> Angstrom {
        self.c
    }

    #[must_use]
    pub fn alpha(&self) -> Degree {
        self.alpha
    }

    #[must_use]
    pub fn beta(&self) -> Degree {
        self.beta
    }

    #[must_use]
    pub fn gamma(&self) -> Degree {
        self.gamma
    }

    /// Cartesian lattice vectors as matrix rows: `a` along x, `b` in the xy
    /// plane.
    #[must_use]
    pub fn cell_matrix(&self) -> Matrix3 {
        let (a, b, c) = (f64::from(self.a), f64::from(self.b), f64::from(self.c));
        let (cos_alpha, cos_beta) = (self.alpha.to_radians().cos(), self.beta.to_radians().cos());
        let (cos_gamma, sin_gamma) = (self.gamma.to_radians().cos(), self.gamma.to_radians().sin());

        let bx = b * cos_gamma;
        let by = b * sin_gamma;

        let cx = c * cos_beta;
        let cy = if sin_gamma.abs() > f64::EPSILON {
            c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma
        } else {
            0.0
        };
        let cz = f64::max(c * c - cx * cx - cy * cy, 0.0).sqrt();

        Matrix3([[a, 0.0, 0.0], [bx, by, 0.0], [cx, cy, cz]])
    }

    #[must_use]
    pub fn vector_a(&self) -> Vector3<Angstrom> {
        Vector3(self.cell_matrix()[0].map(Angstrom::from))
    }

    #[must_use]
    pub fn vector_b(&self) -> Vector3<Angstrom> {
        Vector3(self.cell_matrix()[1].map(Angstrom::from))
    }

    #[must_use]
    pub fn vector_c(&self) -> Vector3<Angstrom> {
        Vector3(self.cell_matrix()[2].map(Angstrom::from))
    }

    /// V = abc * sqrt(1 - cos²α - cos²β - cos²γ + 2 cosα cosβ cosγ)
    #[must_use]
    pub fn volume(&self) -> Volume {
        let (ca, cb, cg) = (
            self.alpha.to_radians().cos(),
            self.beta.to_radians().cos(),
            self.gamma.to_radians().cos(),
        );
        let arg = 1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg;
        let abc = f64::from(self.a) * f64::from(self.b) * f64::from(self.c);
        Volume(abc * f64::max(arg, 0.0).sqrt())
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let v = f64::from(self.volume());
        !v.is_finite() || v.abs() < 1e-8
    }
}

impl fmt::Display for LatticeStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a = {:10.5}  b = {:10.5}  c = {:10.5}  alpha = {:9.4}  beta = {:9.4}  gamma = {:9.4}",
            f64::from(self.a),
            f64::from(self.b),
            f64::from(self.c),
            f64::from(self.alpha),
            f64::from(self.beta),
            f64::from(self.gamma),
        )
    }
}

impl Vector3<FracCoord> {
    #[must_use]
    pub fn into_cartesian(&self, latt: &LatticeStruct) -> Vector3<Angstrom> {
        let (x, y, z): (f64, f64, f64) = (self[0].into(), self[1].into(), self[2].into());
        x * latt.vector_a() + y * latt.vector_b() + z * latt.vector_c()
    }
}

impl Vector3<Angstrom> {
    /// # Errors
    /// `DegenerateLattice` if the cell matrix is not invertible.
    pub fn into_fraction(&self, latt: &LatticeStruct) -> Result<Vector3<FracCoord>, CrystalError> {
        let inv = latt
            .cell_matrix()
            .inv()
            .ok_or(CrystalError::DegenerateLattice)?;
        let cart = [f64::from(self[0]), f64::from(self[1]), f64::from(self[2])];
        Ok(Vector3(inv.row_mul(cart).map(FracCoord::from)))
    }
}

/// Count of one atomic species in a crystal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumAndType {
    pub count: u32,
    pub atomic_num: u8,
}

/// One structure candidate: a lattice and an ordered list of atoms, owned
/// exclusively for the lifetime of the crystal.
#[derive(Debug, Clone, Default)]
pub struct Crystal {
    lattice: LatticeStruct,
    atoms: Vec<AtomStruct>,
}

impl Crystal {
    #[must_use]
    pub fn new(lattice: LatticeStruct, atoms: Vec<AtomStruct>) -> Self {
        Crystal { lattice, atoms }
    }

    #[must_use]
    pub fn lattice(&self) -> LatticeStruct {
        self.lattice
    }

    #[must_use]
    pub fn atoms(&self) -> &[AtomStruct] {
        &self.atoms
    }

    #[must_use]
    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    pub fn add_atom(&mut self, atom: AtomStruct) {
        self.atoms.push(atom);
    }

    /// Remove the first atom equal to `atom`. Returns whether one was found.
    pub fn remove_atom(&mut self, atom: &AtomStruct) -> bool {
        match self.atoms.iter().position(|a| a == atom) {
            Some(idx) => {
                self.atoms.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear_atoms(&mut self) {
        self.atoms.clear();
    }

    /// Reduce every fractional coordinate into [0, 1).
    pub fn wrap_atoms_to_cell(&mut self) {
        for atom in &mut self.atoms {
            let p = atom
                .position
                .map(|i| FracCoord::from(f64::from(i) - f64::from(i).floor()));
            atom.position = Vector3(p);
        }
    }

    #[must_use]
    pub fn positions_cartesian(&self) -> Vec<Vector3<Angstrom>> {
        self.atoms
            .iter()
            .map(|atom| atom.position().into_cartesian(&self.lattice))
            .collect()
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.lattice.volume()
    }

    /// Count of each atomic species, sorted largest count first. Species with
    /// equal counts keep first-seen order.
    #[must_use]
    pub fn composition(&self) -> Vec<NumAndType> {
        let mut counts: Vec<NumAndType> = Vec::new();
        for atom in &self.atoms {
            match counts
                .iter_mut()
                .find(|e| e.atomic_num == atom.atomic_num())
            {
                Some(entry) => entry.count += 1,
                None => counts.push(NumAndType {
                    count: 1,
                    atomic_num: atom.atomic_num(),
                }),
            }
        }
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    /// Minimum-image distance between atoms `i` and `j` under periodic
    /// boundary conditions.
    ///
    /// # Errors
    /// `AtomIndexOutOfRange` if either index is invalid.
    pub fn distance(&self, i: usize, j: usize) -> Result<Angstrom, CrystalError> {
        let ai = self.atom_at(i)?;
        let aj = self.atom_at(j)?;
        Ok(self.min_image_distance(ai, aj))
    }

    /// Smallest periodic distance from atom `index` to any other atom. The
    /// atom's own periodic images are not considered.
    ///
    /// # Errors
    /// `AtomIndexOutOfRange` for an invalid index, `NoNeighbors` for a crystal
    /// with fewer than two atoms.
    pub fn nearest_neighbor_distance(&self, index: usize) -> Result<Angstrom, CrystalError> {
        let atom = self.atom_at(index)?;
        let mut best: Option<f64> = None;
        for (j, other) in self.atoms.iter().enumerate() {
            if j == index {
                continue;
            }
            let d = f64::from(self.min_image_distance(atom, other));
            best = Some(best.map_or(d, |b| b.min(d)));
        }
        best.map(Angstrom).ok_or(CrystalError::NoNeighbors)
    }

    /// True if every pair of atoms is separated by at least the sum of the two
    /// radii from `radii`. Pairs where a radius is unknown are skipped with a
    /// warning.
    #[must_use]
    pub fn check_min_distances(&self, radii: &Radii) -> bool {
        for (i, ai) in self.atoms.iter().enumerate() {
            for aj in &self.atoms[i + 1..] {
                let (Some(ri), Some(rj)) = (
                    radii.for_atomic_number(ai.atomic_num()),
                    radii.for_atomic_number(aj.atomic_num()),
                ) else {
                    warn!(
                        "no radius for atomic number {} or {}, pair not checked",
                        ai.atomic_num(),
                        aj.atomic_num()
                    );
                    continue;
                };

                let min_dist = f64::from(ri) + f64::from(rj);
                if f64::from(self.min_image_distance(ai, aj)) < min_dist {
                    return false;
                }
            }
        }
        true
    }

    fn atom_at(&self, index: usize) -> Result<&AtomStruct, CrystalError> {
        self.atoms
            .get(index)
            .ok_or(CrystalError::AtomIndexOutOfRange {
                index,
                len: self.atoms.len(),
            })
    }

    fn min_image_distance(&self, a: &AtomStruct, b: &AtomStruct) -> Angstrom {
        let m = self.lattice.cell_matrix();

        // wrap the fractional delta to the nearest image, then scan the
        // surrounding cells to cover skewed lattices
        let wrap = |d: f64| d - d.round();
        let base = [wrap(a.x() - b.x()), wrap(a.y() - b.y()), wrap(a.z() - b.z())];

        let mut best = f64::INFINITY;
        for na in -1i32..=1 {
            for nb in -1i32..=1 {
                for nc in -1i32..=1 {
                    let f = [
                        base[0] + f64::from(na),
                        base[1] + f64::from(nb),
                        base[2] + f64::from(nc),
                    ];
                    let cart = m.row_mul(f);
                    let d2 = cart[0] * cart[0] + cart[1] * cart[1] + cart[2] * cart[2];
                    if d2 < best {
                        best = d2;
                    }
                }
            }
        }
        Angstrom(best.sqrt())
    }
}

impl fmt::Display for Crystal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "lattice: {}", self.lattice)?;
        writeln!(f, "atoms ({}):", self.atoms.len())?;
        for atom in &self.atoms {
            writeln!(f, "  {atom}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::atomic_number;

    use super::*;

    macro_rules! assert_eq_approx {
        ($a:expr, $b:expr) => {{
            assert_eq_approx!($a, $b, 1e-12)
        }};
        ($a:expr, $b:expr, $tol:expr) => {{
            let (left, right) = ($a, $b);
            if (left - right).abs() > $tol {
                panic!(
                    "assertion failed: `{} ≈ {}`, diff:  `{}`, tol: `{}`",
                    left,
                    right,
                    (left - right).abs(),
                    $tol
                );
            }
        }};
    }

    fn skewed_lattice() -> LatticeStruct {
        LatticeStruct::new(2.0, 3.0, 4.0, 60.0, 70.0, 80.0)
    }

    #[test]
    fn atom_struct_round_trip() {
        let na = AtomStruct::new(11, 0.1, 0.2, 0.3);
        assert_eq!(na.atomic_num(), 11);
        assert_eq!(na.x(), 0.1);
        assert_eq!(na.y(), 0.2);
        assert_eq!(na.z(), 0.3);
        assert_eq!(na.symbol().unwrap(), "Na");
    }

    #[test]
    fn lattice_struct_round_trip() {
        let latt = skewed_lattice();
        assert_eq!(f64::from(latt.a()), 2.0);
        assert_eq!(f64::from(latt.b()), 3.0);
        assert_eq!(f64::from(latt.c()), 4.0);
        assert_eq!(f64::from(latt.alpha()), 60.0);
        assert_eq!(f64::from(latt.beta()), 70.0);
        assert_eq!(f64::from(latt.gamma()), 80.0);
    }

    #[test]
    fn crystal_leaves_inputs_unchanged() {
        let latt = skewed_lattice();
        let atoms = vec![
            AtomStruct::new(atomic_number!(Na), 0.1, 0.2, 0.3),
            AtomStruct::new(atomic_number!(Cl), 0.6, 0.7, 0.8),
        ];

        let crystal = Crystal::new(latt, atoms.clone());
        assert_eq!(crystal.lattice(), latt);
        assert_eq!(crystal.atoms(), atoms.as_slice());
        assert_eq!(crystal.num_atoms(), 2);
    }

    #[test]
    fn default_crystal_is_empty_with_zero_volume() {
        let crystal = Crystal::default();
        assert_eq!(crystal.num_atoms(), 0);
        assert_eq!(f64::from(crystal.volume()), 0.0);
        assert!(crystal.lattice().is_degenerate());
    }

    #[test]
    fn volume_cubic() {
        let latt = LatticeStruct::new(4.603, 4.603, 4.603, 90.0, 90.0, 90.0);
        assert_eq_approx!(f64::from(latt.volume()), 4.603 * 4.603 * 4.603, 1e-8);
    }

    #[test]
    fn volume_matches_cell_matrix_det() {
        let latt = skewed_lattice();
        assert_eq_approx!(f64::from(latt.volume()), latt.cell_matrix().det(), 1e-9);
        assert!(!latt.is_degenerate());
    }

    #[test]
    fn cell_matrix_row_lengths_and_angles() {
        let latt = skewed_lattice();
        let recovered = LatticeStruct::from_cell_matrix(&latt.cell_matrix());
        assert_eq_approx!(f64::from(recovered.a()), 2.0, 1e-9);
        assert_eq_approx!(f64::from(recovered.b()), 3.0, 1e-9);
        assert_eq_approx!(f64::from(recovered.c()), 4.0, 1e-9);
        assert_eq_approx!(f64::from(recovered.alpha()), 60.0, 1e-9);
        assert_eq_approx!(f64::from(recovered.beta()), 70.0, 1e-9);
        assert_eq_approx!(f64::from(recovered.gamma()), 80.0, 1e-9);
    }

    #[test]
    fn frac_to_cart_round_trip() {
        let latt = skewed_lattice();
        let pos = Vector3([
            FracCoord::from(0.3),
            FracCoord::from(0.1),
            FracCoord::from(0.28),
        ]);
        let back = pos.into_cartesian(&latt).into_fraction(&latt).unwrap();
        for i in 0..3 {
            assert_eq_approx!(f64::from(pos[i]), f64::from(back[i]), 1e-10);
        }
    }

    #[test]
    fn into_fraction_degenerate_lattice() {
        let latt = LatticeStruct::default();
        let cart = Vector3([Angstrom(1.0), Angstrom(0.0), Angstrom(0.0)]);
        assert_eq!(
            cart.into_fraction(&latt),
            Err(CrystalError::DegenerateLattice)
        );
    }

    #[test]
    fn wrap_atoms() {
        let mut crystal = Crystal::new(
            skewed_lattice(),
            vec![
                AtomStruct::new(8, 1.25, -0.25, 1.0),
                AtomStruct::new(8, 0.5, 0.0, -1.75),
            ],
        );
        crystal.wrap_atoms_to_cell();

        let a = crystal.atoms()[0];
        assert_eq_approx!(a.x(), 0.25);
        assert_eq_approx!(a.y(), 0.75);
        assert_eq_approx!(a.z(), 0.0);

        let b = crystal.atoms()[1];
        assert_eq_approx!(b.x(), 0.5);
        assert_eq_approx!(b.y(), 0.0);
        assert_eq_approx!(b.z(), 0.25);
    }

    #[test]
    fn add_remove_atoms() {
        let mut crystal = Crystal::new(skewed_lattice(), vec![]);
        let na = AtomStruct::new(11, 0.1, 0.2, 0.3);
        let cl = AtomStruct::new(17, 0.6, 0.7, 0.8);

        crystal.add_atom(na);
        crystal.add_atom(cl);
        assert_eq!(crystal.num_atoms(), 2);

        assert!(crystal.remove_atom(&na));
        assert_eq!(crystal.atoms(), &[cl]);
        assert!(!crystal.remove_atom(&na));

        crystal.clear_atoms();
        assert_eq!(crystal.num_atoms(), 0);
    }

    #[test]
    fn minimum_image_distance() {
        let latt = LatticeStruct::new(4.0, 4.0, 4.0, 90.0, 90.0, 90.0);
        let crystal = Crystal::new(
            latt,
            vec![
                AtomStruct::new(11, 0.0, 0.0, 0.0),
                AtomStruct::new(17, 0.9, 0.0, 0.0),
            ],
        );

        // 0.9 is 0.1 away through the cell boundary: 0.1 * 4.0 angstrom
        let d = crystal.distance(0, 1).unwrap();
        assert_eq_approx!(f64::from(d), 0.4, 1e-10);

        let nn = crystal.nearest_neighbor_distance(1).unwrap();
        assert_eq_approx!(f64::from(nn), 0.4, 1e-10);
    }

    #[test]
    fn distance_index_errors() {
        let crystal = Crystal::new(skewed_lattice(), vec![AtomStruct::new(11, 0.0, 0.0, 0.0)]);
        assert_eq!(
            crystal.distance(0, 1),
            Err(CrystalError::AtomIndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            crystal.nearest_neighbor_distance(0),
            Err(CrystalError::NoNeighbors)
        );
    }

    #[test]
    fn composition_sorted_by_count() {
        let crystal = Crystal::new(
            skewed_lattice(),
            vec![
                AtomStruct::new(atomic_number!(Na), 0.0, 0.0, 0.0),
                AtomStruct::new(atomic_number!(Cl), 0.5, 0.5, 0.5),
                AtomStruct::new(atomic_number!(Cl), 0.5, 0.0, 0.5),
            ],
        );

        let comp = crystal.composition();
        assert_eq!(
            comp,
            vec![
                NumAndType {
                    count: 2,
                    atomic_num: 17
                },
                NumAndType {
                    count: 1,
                    atomic_num: 11
                },
            ]
        );
    }

    #[test]
    fn min_distance_check() {
        let latt = LatticeStruct::new(4.0, 4.0, 4.0, 90.0, 90.0, 90.0);
        let crystal = Crystal::new(
            latt,
            vec![
                AtomStruct::new(11, 0.0, 0.0, 0.0),
                AtomStruct::new(17, 0.1, 0.0, 0.0),
            ],
        );

        // 0.4 angstrom apart, far below the covalent contact of Na + Cl
        assert!(!crystal.check_min_distances(&Radii::new(1.0)));
        assert!(crystal.check_min_distances(&Radii::new(0.01)));
    }
}
