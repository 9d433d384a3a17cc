//! End-to-end scenarios through `compute`.

use approx::assert_relative_eq;

use predim_core::assembly::{recommend, ElementCategory};
use predim_core::calculations::{base_shear, distribute, ColumnFormula};
use predim_core::project::{NonStructuralInputs, ProjectInfo, StairSettings};
use predim_core::{compute, CalcError, ProjectInputs, SeismicZone};

/// Four stories, D + L = 100 kN/m² so that W = 1200 kN.
fn four_story_building() -> ProjectInputs {
    ProjectInputs {
        info: ProjectInfo {
            name: "Aula Múltiple".to_string(),
            location: "Armenia".to_string(),
        },
        floor_height_m: 3.0,
        floor_count: 4,
        dead_load_kn_m2: 70.0,
        live_load_kn_m2: 30.0,
        beam_span_m: 5.0,
        column_axial_load_kn: 200.0,
        concrete_fc_mpa: 21.0,
        tributary_width_m: None,
        seismic_coefficient: 0.1,
        nonstructural: NonStructuralInputs {
            ap: 1.0,
            sds: 1.0,
            wp_kn: 1.0,
        },
        building_height_m: 12.0,
        seismic_zone: SeismicZone::High,
        stair: StairSettings::default(),
        ..ProjectInputs::default()
    }
}

#[test]
fn reference_building() {
    let report = compute(&four_story_building()).unwrap();
    let results = &report.results;

    assert_relative_eq!(results.beam.height_m, 0.5);
    assert_relative_eq!(results.beam.width_m, 0.25);

    assert_eq!(results.column.formula, ColumnFormula::Simple);
    assert_relative_eq!(results.column.area_cm2().value(), 27.21, epsilon = 0.01);
    assert_relative_eq!(results.column.area_m2, 0.0027211, epsilon = 1e-7);

    assert_relative_eq!(results.total_weight_kn(), 1200.0, max_relative = 1e-12);
    assert_relative_eq!(results.base_shear_kn(), 120.0, max_relative = 1e-12);

    let forces = results.floor_forces_kn();
    assert_eq!(forces.len(), 4);
    assert_relative_eq!(forces.iter().sum::<f64>(), 120.0, epsilon = 1e-6);
    assert!(forces[3] > forces[0]);

    // 3.0 m story with 0.17/0.28 steps
    assert_eq!(results.stairs.step_count, 18);
    assert_relative_eq!(results.stairs.total_run_m, 5.04, epsilon = 1e-9);

    assert_relative_eq!(results.nonstructural.fp_kn, 0.4);
}

#[test]
fn weight_is_shared_by_shear_and_report() {
    let inputs = four_story_building();
    let report = compute(&inputs).unwrap();
    assert_eq!(
        report.results.base_shear_kn(),
        base_shear(report.results.total_weight_kn(), inputs.seismic_coefficient)
    );
    assert_eq!(
        report.results.floor_forces_kn(),
        distribute(report.results.base_shear_kn(), inputs.floor_count).as_slice()
    );
}

#[test]
fn tributary_variant_selected_by_width() {
    let inputs = ProjectInputs {
        tributary_width_m: Some(4.0),
        ..four_story_building()
    };
    let report = compute(&inputs).unwrap();
    assert_eq!(report.results.column.formula, ColumnFormula::Tributary { width_m: 4.0 });
    assert_relative_eq!(report.results.column.area_cm2().value(), 27.2108843 / 4.0, epsilon = 1e-6);
}

#[test]
fn single_story_puts_all_shear_on_roof() {
    let inputs = ProjectInputs {
        floor_count: 1,
        ..four_story_building()
    };
    let report = compute(&inputs).unwrap();
    assert_eq!(report.results.floor_forces_kn(), &[report.results.base_shear_kn()]);
}

#[test]
fn recommendations_follow_zone() {
    for zone in SeismicZone::ALL {
        let inputs = ProjectInputs {
            seismic_zone: zone,
            ..four_story_building()
        };
        let report = compute(&inputs).unwrap();
        assert_eq!(report.recommendations.len(), 3);
        for (rec, category) in report.recommendations.iter().zip(ElementCategory::ALL) {
            assert_eq!(rec.category, category);
            assert_eq!(rec.text, recommend(zone, category));
        }
    }
}

#[test]
fn invalid_floor_height_produces_no_report() {
    let inputs = ProjectInputs {
        floor_height_m: 0.0,
        ..four_story_building()
    };
    let err = compute(&inputs).unwrap_err();
    match &err {
        CalcError::InvalidInput { field, reason, .. } => {
            assert_eq!(field, "floor_height_m");
            assert_eq!(reason, "must be > 0");
        }
    }
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

#[test]
fn compute_leaves_inputs_untouched() {
    let inputs = four_story_building();
    let before = inputs.clone();
    let _ = compute(&inputs).unwrap();
    assert_eq!(inputs, before);
}

#[test]
fn inputs_from_json_file_format() {
    let json = r#"{
        "info": { "name": "Torre B" },
        "floor_height_m": 2.7,
        "floor_count": 6,
        "dead_load_kn_m2": 6.5,
        "live_load_kn_m2": 1.8,
        "beam_span_m": 6.2,
        "column_axial_load_kn": 850.0,
        "concrete_fc_mpa": 28.0,
        "tributary_width_m": 5.0,
        "seismic_coefficient": 0.25,
        "nonstructural": { "ap": 2.5, "sds": 0.75, "wp_kn": 3.2 },
        "building_height_m": 16.2,
        "seismic_zone": "High",
        "usage_class": "II",
        "soil_type": "D",
        "structural_system": "Dual",
        "primary_material": "ReinforcedConcrete",
        "stair": { "riser_m": 0.18 }
    }"#;
    let inputs: ProjectInputs = serde_json::from_str(json).unwrap();
    assert_eq!(inputs.stair.tread_m, 0.28);

    let report = compute(&inputs).unwrap();
    assert_eq!(report.results.floor_forces_kn().len(), 6);
    // 2.7 / 0.18 = 15
    assert_eq!(report.results.stairs.step_count, 15);
    assert_relative_eq!(report.results.nonstructural.fp_kn, 0.4 * 2.5 * 0.75 * 3.2, max_relative = 1e-12);
}
