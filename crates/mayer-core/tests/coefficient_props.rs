use mayer_core::{Coefficient, RationalCoefficient};
use proptest::prelude::*;

fn coefficient() -> impl Strategy<Value = RationalCoefficient> {
    (-1_000i64..1_000, 1u64..200)
        .prop_map(|(numerator, denominator)| RationalCoefficient::fraction(numerator, denominator).unwrap())
}

fn as_pair(c: &RationalCoefficient) -> (i128, i128) {
    (
        i128::from(c.sign().value()) * i128::from(c.numerator()),
        i128::from(c.denominator()),
    )
}

proptest! {
    #[test]
    fn add_matches_rational_sum(a in coefficient(), b in coefficient()) {
        let mut sum = a.copy();
        sum.add(&b).unwrap();
        let (an, ad) = as_pair(&a);
        let (bn, bd) = as_pair(&b);
        let (sn, sd) = as_pair(&sum);
        prop_assert_eq!(sn * ad * bd, (an * bd + bn * ad) * sd);
    }

    #[test]
    fn add_keeps_mathematical_sign(a in coefficient(), b in coefficient()) {
        let mut sum = a.copy();
        sum.add(&b).unwrap();
        let (an, ad) = as_pair(&a);
        let (bn, bd) = as_pair(&b);
        let exact = an * bd + bn * ad;
        if exact != 0 {
            prop_assert_eq!(i128::from(sum.sign().value()) * exact.signum(), exact.signum().abs());
        } else {
            prop_assert!(sum.is_zero());
        }
    }

    #[test]
    fn multiply_is_commutative_and_associative(
        a in coefficient(),
        b in coefficient(),
        c in coefficient(),
    ) {
        let mut ab = a.copy();
        ab.multiply(&b).unwrap();
        let mut ba = b.copy();
        ba.multiply(&a).unwrap();
        prop_assert!(ab.same_value(&ba));

        let mut ab_c = ab.copy();
        ab_c.multiply(&c).unwrap();
        let mut bc = b.copy();
        bc.multiply(&c).unwrap();
        let mut a_bc = a.copy();
        a_bc.multiply(&bc).unwrap();
        prop_assert!(ab_c.same_value(&a_bc));
    }

    #[test]
    fn inc_k_times_adds_k(a in coefficient(), k in 0i64..25) {
        let mut stepped = a.copy();
        for _ in 0..k {
            stepped.inc().unwrap();
        }
        let mut expected = a.copy();
        expected.add(&RationalCoefficient::from_integer(k)).unwrap();
        prop_assert!(stepped.same_value(&expected));
    }

    #[test]
    fn mutating_copy_leaves_original(a in coefficient(), b in coefficient()) {
        let snapshot = a.clone();
        let mut copy = a.copy();
        copy.add(&b).unwrap();
        copy.multiply(&b).unwrap();
        copy.inc().unwrap();
        copy.switch_sign();
        prop_assert_eq!(a, snapshot);
    }
}
