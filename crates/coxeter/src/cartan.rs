use std::fmt;
use std::str::FromStr;

use crate::{CoxeterError, CoxeterLabel, CoxeterMatrix, CoxeterResult, IndexLabel};

/// Finite irreducible Cartan type, whose Coxeter matrix uses the Bourbaki
/// labelling of the generators with index set `1..=n`.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::EnumDiscriminants)]
#[strum_discriminants(name(CartanFamily), derive(strum::Display, strum::EnumString, strum::EnumIter))]
pub enum CartanType {
    A(u32),
    B(u32),
    C(u32),
    D(u32),
    E(u32),
    F4,
    G2,
    H(u32),
    /// Dihedral type `I_2(m)`.
    I(u32),
}
impl fmt::Display for CartanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartanType::A(n) => write!(f, "A{n}"),
            CartanType::B(n) => write!(f, "B{n}"),
            CartanType::C(n) => write!(f, "C{n}"),
            CartanType::D(n) => write!(f, "D{n}"),
            CartanType::E(n) => write!(f, "E{n}"),
            CartanType::F4 => write!(f, "F4"),
            CartanType::G2 => write!(f, "G2"),
            CartanType::H(n) => write!(f, "H{n}"),
            CartanType::I(m) => write!(f, "I2({m})"),
        }
    }
}
impl FromStr for CartanType {
    type Err = CoxeterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CoxeterError::UnknownCartanType(s.to_string());

        let compact = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect::<String>()
            .to_ascii_uppercase();
        match compact.as_str() {
            "F4" => return Ok(CartanType::F4),
            "G2" => return Ok(CartanType::G2),
            _ => (),
        }
        let mut chars = compact.chars();
        let family: CartanFamily = chars
            .next()
            .map(|c| c.to_string())
            .ok_or_else(err)?
            .parse()
            .map_err(|_| err())?;
        let rest = chars.as_str();

        let ret = if family == CartanFamily::I {
            let m = rest
                .strip_prefix("2(")
                .and_then(|r| r.strip_suffix(')'))
                .unwrap_or(rest);
            CartanType::I(m.parse().map_err(|_| err())?)
        } else {
            let n: u32 = rest.parse().map_err(|_| err())?;
            match family {
                CartanFamily::A => CartanType::A(n),
                CartanFamily::B => CartanType::B(n),
                CartanFamily::C => CartanType::C(n),
                CartanFamily::D => CartanType::D(n),
                CartanFamily::E => CartanType::E(n),
                CartanFamily::F4 | CartanFamily::G2 => return Err(err()),
                CartanFamily::H => CartanType::H(n),
                CartanFamily::I => CartanType::I(n),
            }
        };
        ret.validate().map_err(|_| err())?;
        Ok(ret)
    }
}
impl CartanType {
    /// Returns an error if the rank is out of range for the family.
    pub fn validate(self) -> CoxeterResult<()> {
        let ok = match self {
            CartanType::A(n) => n >= 1,
            CartanType::B(n) | CartanType::C(n) => n >= 2,
            CartanType::D(n) => n >= 2,
            CartanType::E(n) => (6..=8).contains(&n),
            CartanType::F4 | CartanType::G2 => true,
            CartanType::H(n) => (3..=4).contains(&n),
            CartanType::I(m) => m >= 2,
        };
        match ok {
            true => Ok(()),
            false => Err(CoxeterError::UnknownCartanType(self.to_string())),
        }
    }

    /// Returns the number of generators.
    pub fn rank(self) -> usize {
        match self {
            CartanType::A(n)
            | CartanType::B(n)
            | CartanType::C(n)
            | CartanType::D(n)
            | CartanType::E(n)
            | CartanType::H(n) => n as usize,
            CartanType::F4 => 4,
            CartanType::G2 | CartanType::I(_) => 2,
        }
    }

    /// Returns the index set `1..=n`.
    pub fn index_set(self) -> Vec<IndexLabel> {
        (1..=self.rank() as i64).map(IndexLabel::Int).collect()
    }

    /// Returns the Coxeter matrix, or an error if the rank is out of range
    /// for the family.
    pub fn coxeter_matrix(self) -> CoxeterResult<CoxeterMatrix> {
        self.validate()?;
        let n = self.rank();
        let edges = self.edges();
        let label = |i: usize, j: usize| {
            edges
                .iter()
                .find(|&&(a, b, _)| (a, b) == (i, j))
                .map_or(CoxeterLabel::COMMUTING, |&(_, _, m)| CoxeterLabel::Finite(m))
        };
        CoxeterMatrix::from_fn(n, label)
    }

    /// Returns the edges of the Coxeter diagram as `(i, j, label)` with
    /// `i < j`, using zero-based generator positions.
    fn edges(self) -> Vec<(usize, usize, u32)> {
        let n = self.rank();
        let path = |n: usize| (1..n).map(|i| (i - 1, i, 3)).collect::<Vec<_>>();
        match self {
            CartanType::A(_) => path(n),
            CartanType::B(_) | CartanType::C(_) => {
                let mut edges = path(n);
                if let Some(last) = edges.last_mut() {
                    last.2 = 4;
                }
                edges
            }
            CartanType::D(2) => vec![],
            CartanType::D(_) => {
                let mut edges = path(n - 1);
                edges.push((n - 3, n - 1, 3));
                edges
            }
            CartanType::E(_) => {
                let mut edges = vec![(0, 2, 3), (1, 3, 3)];
                edges.extend((2..n - 1).map(|i| (i, i + 1, 3)));
                edges
            }
            CartanType::F4 => vec![(0, 1, 3), (1, 2, 4), (2, 3, 3)],
            CartanType::G2 => vec![(0, 1, 6)],
            CartanType::H(_) => {
                let mut edges = path(n);
                if let Some(last) = edges.last_mut() {
                    last.2 = 5;
                }
                edges
            }
            CartanType::I(m) => vec![(0, 1, m)],
        }
    }
}
