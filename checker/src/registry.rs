//! Check methods and the comparator each one selects.
//!
//! Method names are the ones the judging service passes around (`double4`,
//! `long`, `nhuge`, ...). Parsing is case-insensitive.

use crate::comparators::double_comparator::DoubleComparator;
use crate::comparators::huge_comparator::HugeComparator;
use crate::comparators::integer_comparator::IntegerComparator;
use crate::comparators::sequence_comparator::SequenceComparator;
use crate::comparators::yesno_comparator::YesNoComparator;
use crate::error::CheckerError;
use crate::traits::checker::Checker;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lower")]
pub enum CheckMethod {
    /// One double, eps = 1e-4.
    Double4,
    /// One double, eps = 1e-6.
    Double6,
    /// One signed 64-bit integer.
    Long,
    /// One signed 32-bit integer.
    Int,
    /// One arbitrary-precision integer.
    Huge,
    /// Ordered sequence of arbitrary-precision integers.
    Nhuge,
    /// One case-insensitive YES/NO.
    Yesno,
}

impl CheckMethod {
    pub const ALL: [CheckMethod; 7] = [
        CheckMethod::Double4,
        CheckMethod::Double6,
        CheckMethod::Long,
        CheckMethod::Int,
        CheckMethod::Huge,
        CheckMethod::Nhuge,
        CheckMethod::Yesno,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CheckMethod::Double4 => "double4",
            CheckMethod::Double6 => "double6",
            CheckMethod::Long => "long",
            CheckMethod::Int => "int",
            CheckMethod::Huge => "huge",
            CheckMethod::Nhuge => "nhuge",
            CheckMethod::Yesno => "yesno",
        }
    }

    /// Builds the comparator for this method.
    pub fn checker(self) -> Box<dyn Checker> {
        match self {
            CheckMethod::Double4 => Box::new(DoubleComparator::double4()),
            CheckMethod::Double6 => Box::new(DoubleComparator::double6()),
            CheckMethod::Long => Box::new(IntegerComparator::long()),
            CheckMethod::Int => Box::new(IntegerComparator::int()),
            CheckMethod::Huge => Box::new(HugeComparator),
            CheckMethod::Nhuge => Box::new(SequenceComparator),
            CheckMethod::Yesno => Box::new(YesNoComparator),
        }
    }
}

impl fmt::Display for CheckMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CheckMethod {
    type Err = CheckerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CheckMethod::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| CheckerError::UnknownMethod(s.to_string()))
    }
}
