use crate::{
    field::{FieldAccess, DENSITY_COMP, RHO_THETA_COMP, SCALAR_COMP},
    indexing::CellIndex,
    order::SpatialOrder,
    tags::{Direction, FaceSide},
    Float,
};

/// Interpolates `component` of a cell-centered field onto the `side` face of `cell` along
/// `direction`.
///
/// The face lies between a lower cell `L` and an upper cell `U`, and each weight multiplies the
/// pair of samples at equal distance on either side. Pairs are summed from the nearest one
/// outward, so the next face of `m` and the previous face of `m + 1` perform the same floating
/// point operations on the same samples.
///
/// Constant fields are reproduced exactly at second order only. The fourth- and sixth-order
/// weights are not exact binary fractions, so a constant comes back within a few ulps, e.g.
/// `0.1` becomes `0.10000000000000002` at fourth order.
pub fn interpolate_to_face<F: FieldAccess + ?Sized>(
    field: &F,
    component: usize,
    cell: CellIndex,
    direction: Direction,
    side: FaceSide,
    order: SpatialOrder,
) -> Float {
    let (lower, upper) = side.adjacent_cells(cell, direction);
    (0..)
        .zip(order.weights())
        .fold(0., |acc, (reach, &weight)| {
            acc + weight
                * (field.value(lower.shift(direction, -reach), component)
                    + field.value(upper.shift(direction, reach), component))
        })
}

pub fn interpolate_density<F: FieldAccess + ?Sized>(
    cons: &F,
    cell: CellIndex,
    direction: Direction,
    side: FaceSide,
    order: SpatialOrder,
) -> Float {
    interpolate_to_face(cons, DENSITY_COMP, cell, direction, side, order)
}

pub fn interpolate_rho_theta<F: FieldAccess + ?Sized>(
    cons: &F,
    cell: CellIndex,
    direction: Direction,
    side: FaceSide,
    order: SpatialOrder,
) -> Float {
    interpolate_to_face(cons, RHO_THETA_COMP, cell, direction, side, order)
}

pub fn interpolate_scalar<F: FieldAccess + ?Sized>(
    cons: &F,
    cell: CellIndex,
    direction: Direction,
    side: FaceSide,
    order: SpatialOrder,
) -> Float {
    interpolate_to_face(cons, SCALAR_COMP, cell, direction, side, order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{field::OwnedField, field::NUM_CONS};
    use itertools::iproduct;
    use strum::IntoEnumIterator;

    fn random_field(seed: u64) -> OwnedField {
        let mut rng = frand::Rand::with_seed(seed);
        let mut field = OwnedField::zeros([6, 6, 6], NUM_CONS, 3);
        for cell in field.envelope().iter() {
            for comp in 0..NUM_CONS {
                *field.value_mut(cell, comp) = rng.gen_range((-10.)..10.);
            }
        }
        field
    }

    #[test]
    fn test_constant_field() {
        for value in [1., -3.25, 287.5, 1e-3] {
            let field = OwnedField::from_fn([4, 4, 4], 1, 3, |_, _| value);
            for (order, direction, side) in
                iproduct!(SpatialOrder::iter(), Direction::iter(), FaceSide::iter())
            {
                approx::assert_relative_eq!(
                    interpolate_to_face(&field, 0, CellIndex::new(1, 2, 1), direction, side, order),
                    value,
                    max_relative = 1e-14
                );
            }
        }
    }

    #[test]
    fn test_second_order_constant_is_exact() {
        let field = OwnedField::from_fn([3, 3, 3], 1, 1, |_, _| 0.1);
        for (direction, side) in iproduct!(Direction::iter(), FaceSide::iter()) {
            assert_eq!(
                interpolate_to_face(&field, 0, CellIndex::new(1, 1, 1), direction, side, SpatialOrder::Second),
                0.1
            );
        }
    }

    #[test]
    fn test_higher_order_constant_is_within_round_off() {
        for value in [0.1, 7.77, -2.3] {
            let field = OwnedField::from_fn([4, 4, 4], 1, 3, |_, _| value);
            for (order, side) in iproduct!(SpatialOrder::iter(), FaceSide::iter()) {
                let face = interpolate_to_face(&field, 0, CellIndex::new(1, 1, 1), Direction::X, side, order);
                assert!(
                    (face - value).abs() <= 4. * Float::EPSILON * value.abs(),
                    "{order}: {face:e} vs {value:e}"
                );
            }
        }
    }

    #[test]
    fn test_mirror_symmetry() {
        let field = random_field(7);
        for (order, direction, comp) in
            iproduct!(SpatialOrder::iter(), Direction::iter(), 0..NUM_CONS)
        {
            for cell in crate::CellBox::interior([5, 5, 5]).iter() {
                let next = interpolate_to_face(&field, comp, cell, direction, FaceSide::Next, order);
                let previous = interpolate_to_face(
                    &field,
                    comp,
                    cell.shift(direction, 1),
                    direction,
                    FaceSide::Previous,
                    order,
                );
                assert_eq!(next.to_bits(), previous.to_bits(), "{order} {direction} {cell:?}");
            }
        }
    }

    #[test]
    fn test_second_order_is_mean_of_neighbors() {
        let field = random_field(11);
        let cell = CellIndex::new(2, 3, 1);
        for direction in Direction::iter() {
            assert_eq!(
                interpolate_to_face(&field, 1, cell, direction, FaceSide::Previous, SpatialOrder::Second),
                0.5 * (field.value(cell, 1) + field.value(cell.shift(direction, -1), 1))
            );
            assert_eq!(
                interpolate_to_face(&field, 1, cell, direction, FaceSide::Next, SpatialOrder::Second),
                0.5 * (field.value(cell, 1) + field.value(cell.shift(direction, 1), 1))
            );
        }
    }

    #[test]
    fn test_fourth_order_stencil() {
        let field = random_field(3);
        let cell = CellIndex::new(2, 2, 2);
        let q = |i: isize| field.value(CellIndex::new(i, 2, 2), SCALAR_COMP);
        let expected = (7.0 / 12.0) * (q(2) + q(1)) - (1.0 / 12.0) * (q(3) + q(0));
        approx::assert_relative_eq!(
            interpolate_scalar(&field, cell, Direction::X, FaceSide::Previous, SpatialOrder::Fourth),
            expected,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_sixth_order_stencil() {
        let field = random_field(5);
        let q = |k: isize| field.value(CellIndex::new(1, 2, k), DENSITY_COMP);
        let expected = (37.0 / 60.0) * (q(2) + q(3)) - (2.0 / 15.0) * (q(1) + q(4))
            + (1.0 / 60.0) * (q(0) + q(5));
        approx::assert_relative_eq!(
            interpolate_density(
                &field,
                CellIndex::new(1, 2, 2),
                Direction::Z,
                FaceSide::Next,
                SpatialOrder::Sixth
            ),
            expected,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_linear_field_is_reproduced() {
        let field = OwnedField::from_fn([5, 5, 5], NUM_CONS, 3, |cell, comp| {
            0.3 * cell.i as Float - 1.7 * cell.j as Float + 2.1 * cell.k as Float + comp as Float
        });
        for (order, direction, side) in
            iproduct!(SpatialOrder::iter(), Direction::iter(), FaceSide::iter())
        {
            let cell = CellIndex::new(2, 2, 2);
            let face_offset = match side {
                FaceSide::Previous => -0.5,
                FaceSide::Next => 0.5,
            };
            let slope = [0.3, -1.7, 2.1][direction.axis()];
            let expected = 0.3 * 2. - 1.7 * 2. + 2.1 * 2. + RHO_THETA_COMP as Float + slope * face_offset;
            approx::assert_abs_diff_eq!(
                interpolate_rho_theta(&field, cell, direction, side, order),
                expected,
                epsilon = 1e-12
            );
        }
    }
}
