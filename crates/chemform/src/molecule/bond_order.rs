use crate::{BondOrder, ChemformError};

impl TryFrom<u8> for BondOrder {
    type Error = ChemformError;

    fn try_from(order: u8) -> Result<Self, Self::Error> {
        match order {
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            3 => Ok(Self::Triple),
            order => Err(ChemformError::InvalidBondOrder { order }),
        }
    }
}

impl From<BondOrder> for u8 {
    fn from(order: BondOrder) -> Self {
        match order {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_order_conversions() {
        assert_eq!(BondOrder::try_from(1_u8), Ok(BondOrder::Single));
        assert_eq!(BondOrder::try_from(2_u8), Ok(BondOrder::Double));
        assert_eq!(BondOrder::try_from(3_u8), Ok(BondOrder::Triple));
        assert_eq!(
            BondOrder::try_from(0_u8),
            Err(ChemformError::InvalidBondOrder { order: 0 })
        );
        assert_eq!(
            BondOrder::try_from(4_u8),
            Err(ChemformError::InvalidBondOrder { order: 4 })
        );
        for order in 1..=3_u8 {
            assert_eq!(u8::from(BondOrder::try_from(order).unwrap()), order);
        }
    }

    #[test]
    fn bond_order_display() {
        assert_eq!(BondOrder::Single.to_string(), "1");
        assert_eq!(BondOrder::Double.to_string(), "2");
        assert_eq!(BondOrder::Triple.to_string(), "3");
        // Bond orders sort by strength
        assert!(BondOrder::Single < BondOrder::Double);
        assert!(BondOrder::Double < BondOrder::Triple);
    }
}
