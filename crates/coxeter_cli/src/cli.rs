use std::sync::Arc;

use coxeter::cyclomath::{IntegerRing, RationalField, RealField, UniversalCyclotomicField};
use coxeter::{
    CartanType, CoefficientRing, CoxeterGroupData, CoxeterMatrix, CoxeterMatrixGroup, IndexLabel,
};
use eyre::{Context, Result, ensure};
use itertools::Itertools;
use serde::Serialize;
use supercrystal::{
    FormalCharacter, RegularSuperCrystal, StandardCrystal, SuperCartanType, TensorProduct,
};

use crate::parse::{parse_coxeter_diagram, parse_coxeter_matrix, parse_index_label};

/// Coxeter group and super crystal command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print information about a Coxeter group.
    #[command(group(clap::ArgGroup::new("input").required(true)))]
    Group {
        /// Coxeter matrix with rows separated by `;` (such as `1,3;3,1`), using
        /// `-1` for infinity.
        #[arg(long, group = "input", allow_hyphen_values = true)]
        matrix: Option<String>,
        /// Finite Cartan type (such as `A3`, `H4`, or `I2(7)`).
        #[arg(long = "type", group = "input")]
        cartan_type: Option<CartanType>,
        /// Coxeter diagram as comma-separated edges `a-b` or `a-b:label` and
        /// isolated vertices (such as `1-2,2-3:4`).
        #[arg(long, group = "input")]
        graph: Option<String>,

        /// Coefficient domain for the reflection representation.
        #[arg(long, value_enum, default_value_t = Ring::Cyclotomic)]
        ring: Ring,
        /// Comma-separated labels for the generators.
        #[arg(long, value_delimiter = ',')]
        index_set: Option<Vec<String>>,

        /// Enumerate the elements of a finite group.
        #[arg(long)]
        order: bool,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Decompose a tensor power of the standard crystal of gl(m|n) into
    /// connected components.
    Crystal {
        /// Size of the even block.
        #[arg(long)]
        m: usize,
        /// Size of the odd block.
        #[arg(long)]
        n: usize,
        /// Number of tensor factors.
        #[arg(long, default_value_t = 1)]
        tensor_power: usize,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// Coefficient domain.
#[derive(clap::ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Ring {
    /// Universal cyclotomic field (exact)
    Cyclotomic,
    /// Floating-point real numbers
    Real,
    /// Rational numbers
    Rational,
    /// Integers
    Integer,
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Group {
            matrix,
            cartan_type,
            graph,

            ring,
            index_set,

            order,
            json,
        } => {
            let data: CoxeterGroupData = match (matrix, cartan_type, graph) {
                (Some(m), _, _) => parse_coxeter_matrix(&m)?.into(),
                (_, Some(t), _) => t.into(),
                (_, _, Some(g)) => parse_coxeter_diagram(&g)?.into(),
                (None, None, None) => eyre::bail!("no Coxeter group specified"),
            };
            let index_set = index_set.map(|labels| {
                labels
                    .iter()
                    .map(|label| parse_index_label(label))
                    .collect_vec()
            });
            log::debug!("constructing Coxeter group from {data:?}");

            let options = GroupOptions { order, json };
            match ring {
                Ring::Cyclotomic => print_group(data, UniversalCyclotomicField, index_set, options),
                Ring::Real => print_group(data, RealField, index_set, options),
                Ring::Rational => print_group(data, RationalField, index_set, options),
                Ring::Integer => print_group(data, IntegerRing, index_set, options),
            }
        }

        Subcommand::Crystal {
            m,
            n,
            tensor_power,
            json,
        } => {
            ensure!(tensor_power >= 1, "tensor power must be at least 1");
            let c = StandardCrystal::new(SuperCartanType::new(m, n));
            let others = vec![&c; tensor_power - 1];
            let t = c.tensor(&others)?;
            print_crystal(&t, tensor_power, json)
        }
    }
}

#[derive(Debug, Copy, Clone)]
struct GroupOptions {
    order: bool,
    json: bool,
}

/// Information about a Coxeter group.
#[derive(Serialize, Debug)]
struct GroupInfo {
    ring: String,
    index_set: Vec<IndexLabel>,
    coxeter_matrix: CoxeterMatrix,
    is_finite: bool,
    category: String,
    bilinear_form: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    length_distribution: Option<Vec<usize>>,
}
impl GroupInfo {
    fn new<R: CoefficientRing>(group: &CoxeterMatrixGroup<R>, order: bool) -> Result<Self> {
        let length_distribution = match order && group.is_finite() {
            true => Some(group.length_distribution()?),
            false => None,
        };
        Ok(Self {
            ring: group.ring().to_string(),
            index_set: group.index_set().to_vec(),
            coxeter_matrix: group.coxeter_matrix().clone(),
            is_finite: group.is_finite(),
            category: group.category().to_string(),
            bilinear_form: group
                .bilinear_form()
                .rows()
                .map(|row| row.iter().map(|x| x.to_string()).collect())
                .collect(),
            order: length_distribution.as_ref().map(|d| d.iter().sum()),
            length_distribution,
        })
    }
}

fn print_group<R: CoefficientRing>(
    data: CoxeterGroupData,
    ring: R,
    index_set: Option<Vec<IndexLabel>>,
    options: GroupOptions,
) -> Result<()> {
    let group: Arc<CoxeterMatrixGroup<R>> =
        CoxeterMatrixGroup::new(data, ring, index_set).wrap_err("error constructing group")?;
    if options.order && !group.is_finite() {
        log::warn!("not enumerating elements of an infinite group");
    }
    let info = GroupInfo::new(&group, options.order)?;

    if options.json {
        return write_json_output(&info);
    }

    println!("{group}");
    println!("Index set: ({})", info.index_set.iter().join(", "));
    println!("{}", info.category);
    println!("Bilinear form:");
    println!("{}", group.bilinear_form());
    if let (Some(order), Some(distribution)) = (info.order, &info.length_distribution) {
        println!("Order: {order}");
        println!("Elements by length: {}", distribution.iter().join(", "));
    }
    Ok(())
}

/// Information about a crystal decomposition.
#[derive(Serialize, Debug)]
struct CrystalInfo {
    cartan_type: SuperCartanType,
    tensor_power: usize,
    cardinality: usize,
    character: FormalCharacter,
    components: Vec<ComponentInfo>,
}

/// Information about a connected component of a crystal.
#[derive(Serialize, Debug)]
struct ComponentInfo {
    cardinality: usize,
    generators: Vec<String>,
    character: FormalCharacter,
}

fn print_crystal(
    t: &TensorProduct<StandardCrystal>,
    tensor_power: usize,
    json: bool,
) -> Result<()> {
    let components = t
        .connected_components()
        .iter()
        .map(|component| ComponentInfo {
            cardinality: component.cardinality(),
            generators: component.generators().iter().map(|g| g.to_string()).collect(),
            character: component.character(),
        })
        .collect_vec();
    let info = CrystalInfo {
        cartan_type: t.cartan_type(),
        tensor_power,
        cardinality: t.cardinality(),
        character: t.character(),
        components,
    };

    if json {
        return write_json_output(&info);
    }

    println!("{t}");
    println!(
        "{} elements in {} connected components",
        info.cardinality,
        info.components.len(),
    );
    for component in &info.components {
        println!(
            "  {} elements generated by {}",
            component.cardinality,
            component.generators.join(", "),
        );
    }
    Ok(())
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
