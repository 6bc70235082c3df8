use std::fmt::{self, Display, Formatter};

use crate::ElementRef;

impl<'s> From<&'s String> for ElementRef<'s> {
    fn from(symbol: &'s String) -> Self {
        Self::Symbol(symbol)
    }
}

impl Display for ElementRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(atomic_number) => write!(f, "#{atomic_number}"),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}
