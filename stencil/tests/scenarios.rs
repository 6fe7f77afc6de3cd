use stencil::{
    examples,
    field::{DENSITY_COMP, RHO_THETA_COMP},
    AdvectedQuantity, AdvectingQuantity, CellBox, CellIndex, ConfigError, Direction, Discretization,
    FaceSide, FieldAccess, Geometry, MomentumFields, OwnedField, SolverChoice, SpatialOrder,
    StressComponent, TurbulenceModel, VelocityFields,
};
use strum::IntoEnumIterator;

#[test]
fn test_density_ramp_face_value() {
    let cons = examples::density_ramp(6, 3);
    for order in SpatialOrder::iter() {
        let discretization =
            Discretization::new(SolverChoice::default().with_spatial_order(order), Geometry::uniform(1.));
        discretization.check_ghost_cells("cons", &cons).unwrap();
        approx::assert_relative_eq!(
            discretization.interpolate_to_face(
                &cons,
                DENSITY_COMP,
                CellIndex::new(2, 0, 0),
                Direction::X,
                FaceSide::Next
            ),
            3.5,
            max_relative = 1e-14
        );
    }
}

#[test]
fn test_invalid_orders_are_rejected() {
    for order in [0, 1, 3, 5, 8] {
        assert_eq!(
            stencil::order::ghost_cells_required(order),
            Err(ConfigError::UnsupportedSpatialOrder(order))
        );
        assert!(SolverChoice::from_raw(order, "dns").is_err());
    }
    assert_eq!(stencil::order::ghost_cells_required(2), Ok(1));
    assert_eq!(stencil::order::ghost_cells_required(4), Ok(2));
    assert_eq!(stencil::order::ghost_cells_required(6), Ok(3));
}

#[test]
fn test_sixth_order_needs_three_ghost_cells() {
    let discretization = Discretization::new(SolverChoice::from_raw(6, "dns").unwrap(), Geometry::uniform(1.));
    let thin = examples::density_ramp(6, 2);
    assert_eq!(
        discretization.check_ghost_cells("cons", &thin).unwrap_err().to_string(),
        "field `cons` has 2 ghost cell(s) but the configured stencils need 3"
    );
}

#[test]
fn test_les_on_shear_flow() {
    let geometry = Geometry::new([10., 5., 2.]);
    let shear_rate = 0.02;
    let num_cells = [6, 5, 4];
    let [u, v, w] = examples::linear_shear(num_cells, 3, shear_rate, &geometry);
    let velocity = VelocityFields::new(&u, &v, &w);
    let discretization = Discretization::new(
        SolverChoice::from_raw(4, "smagorinsky").unwrap().with_smagorinsky_constant(0.2),
        geometry,
    );
    let nut = discretization.eddy_viscosity(&velocity, num_cells).unwrap();
    assert_eq!(nut.ghost_cells(), 2);
    let expected_nut = (0.2 * geometry.filter_width()).powi(2) * shear_rate;

    let shear = StressComponent::new(Direction::X, Direction::Y);
    let stress = discretization.sweep(CellBox::interior(num_cells), |cell| {
        discretization.stress_term(cell, &velocity, FaceSide::Next, shear, &nut)
    });
    for &value in &stress {
        approx::assert_relative_eq!(value, expected_nut * 0.5 * shear_rate, max_relative = 1e-10);
    }

    let dns = Discretization::new(SolverChoice::default(), geometry);
    for side in FaceSide::iter() {
        approx::assert_relative_eq!(
            dns.stress_term(CellIndex::new(2, 2, 2), &velocity, side, shear.transpose(), &nut),
            0.5 * shear_rate,
            max_relative = 1e-12
        );
        assert_eq!(
            dns.stress_term(
                CellIndex::new(2, 2, 2),
                &velocity,
                side,
                StressComponent::new(Direction::Z, Direction::Z),
                &nut
            ),
            0.
        );
    }
}

#[test]
fn test_uniform_wind_carries_potential_temperature() {
    let geometry = Geometry::new([200., 200., 100.]);
    let num_cells = [8, 4, 6];
    let cons = examples::stratified_atmosphere(num_cells, 3, &geometry);
    let mass_flux = OwnedField::from_fn(num_cells, 1, 3, |_, _| 5.);
    let still = OwnedField::zeros(num_cells, 1, 3);
    let momentum = MomentumFields::new(&mass_flux, &still, &still);

    let discretization = Discretization::new(
        SolverChoice::default()
            .with_spatial_order(SpatialOrder::Sixth)
            .with_turbulence_model(TurbulenceModel::Dns),
        geometry,
    );
    let fluxes = discretization.sweep(CellBox::interior(num_cells), |cell| {
        discretization.state_flux(
            cell,
            &momentum,
            &cons,
            FaceSide::Previous,
            AdvectedQuantity::Theta,
            AdvectingQuantity::RhoU,
        )
    });
    for cell in CellBox::interior(num_cells).iter() {
        let theta = cons.value(cell, RHO_THETA_COMP) / cons.value(cell, DENSITY_COMP);
        approx::assert_relative_eq!(
            fluxes[CellBox::interior(num_cells).local(cell)],
            5. * theta,
            max_relative = 1e-12
        );
        // Nothing crosses the vertical faces.
        assert_eq!(
            discretization.state_flux(
                cell,
                &momentum,
                &cons,
                FaceSide::Next,
                AdvectedQuantity::Unity,
                AdvectingQuantity::RhoW
            ),
            0.
        );
    }
}
