//! Integration tests for the public conversion API of dqconv-rs.
//!
//! These cover the reference cases (identity, pure translation, a known
//! rotation), the degenerate-input contract and configuration loading.

#![allow(clippy::float_cmp)]

use dqconv_rs::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_identity_roundtrip() {
    init_logging();

    let dq = quat_trans_to_udq(Quat::IDENTITY, Vec3::ZERO);
    assert_eq!(
        dq.to_arrays(),
        [[1.0, 0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 0.0]]
    );

    let (q, t) = udq_to_quat_trans(&dq);
    assert_eq!(q, Quat::IDENTITY);
    assert_eq!(t, Vec3::ZERO);

    let (q, t) = dq_to_quat_trans(&dq).expect("identity is not degenerate");
    assert_eq!(q, Quat::IDENTITY);
    assert_eq!(t, Vec3::ZERO);
}

#[test]
fn test_pure_translation() {
    init_logging();

    let dq = quat_trans_to_udq_arrays([1.0, 0.0, 0.0, 0.0], [2.0, 3.0, 4.0]);
    assert_eq!(dq[1], [0.0, 1.0, 1.5, 2.0]);

    let (q, t) = udq_to_quat_trans_arrays(dq);
    assert_eq!(q, [1.0, 0.0, 0.0, 0.0]);
    assert_eq!(t, [2.0, 3.0, 4.0]);
}

#[test]
fn test_half_turn_about_z_reference_values() {
    init_logging();

    // 180 degrees about Z: (w, x, y, z) = (0, 0, 0, 1), translated by +X.
    let dq = quat_trans_to_udq_arrays([0.0, 0.0, 0.0, 1.0], [1.0, 0.0, 0.0]);
    assert_eq!(dq[0], [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(dq[1], [0.0, 0.0, -0.5, 0.0]);

    let (q, t) = udq_to_quat_trans_arrays(dq);
    assert_eq!(q, [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(t, [1.0, 0.0, 0.0]);
}

#[test]
fn test_degenerate_input_is_rejected() {
    init_logging();

    let dq = DualQuat::from_arrays([[0.0, 0.0, 0.0, 0.0], [0.0, 1.0, 1.5, 2.0]]);
    let err = dq_to_quat_trans(&dq).unwrap_err();
    assert!(matches!(err, DqError::DegenerateInput { .. }));
    assert!(err.to_string().contains("degenerate"));

    assert!(dq_to_quat_trans_arrays(dq.to_arrays()).is_err());
    assert!(RigidTransform::try_from_dual_quat(&dq, &ConversionOptions::default()).is_err());
}

#[test]
fn test_degenerate_epsilon_is_configurable() {
    init_logging();

    let dq = DualQuat::from_arrays([[1e-3, 0.0, 0.0, 0.0], [0.0; 4]]);
    assert!(dq_to_quat_trans(&dq).is_ok());

    let strict = ConversionOptions::new().with_degenerate_epsilon(1e-2);
    assert!(matches!(
        dq_to_quat_trans_with(&dq, &strict),
        Err(DqError::DegenerateInput { .. })
    ));
}

#[test]
fn test_translation_scaling_modes() {
    init_logging();

    let dq = quat_trans_to_udq(Quat::from_rotation_y(0.9), Vec3::new(1.0, -1.0, 2.0)) * 4.0;

    let (_, single) = dq_to_quat_trans(&dq).unwrap();
    assert!((single - Vec3::new(4.0, -4.0, 8.0)).length() < 1e-4);

    let options =
        ConversionOptions::new().with_translation_scaling(TranslationScaling::SquaredLength);
    let (_, squared) = dq_to_quat_trans_with(&dq, &options).unwrap();
    assert!((squared - Vec3::new(1.0, -1.0, 2.0)).length() < 1e-4);
}

#[test]
fn test_checked_conversions() {
    init_logging();

    let options = ConversionOptions::from_json(
        r#"{ "validate_unit_inputs": true, "unit_tolerance": 0.001 }"#,
    )
    .expect("valid options");

    let bad_rotation = Quat::from_xyzw(0.0, 0.0, 0.0, 1.1);
    assert!(matches!(
        try_quat_trans_to_udq(bad_rotation, Vec3::ONE, &options),
        Err(DqError::NotUnitQuaternion { .. })
    ));

    let dq = try_quat_trans_to_udq(Quat::from_rotation_x(0.5), Vec3::ONE, &options).unwrap();
    let (_, t) = try_udq_to_quat_trans(&dq, &options).unwrap();
    assert!((t - Vec3::ONE).length() < 1e-5);

    let scaled = dq * 2.0;
    assert!(matches!(
        try_udq_to_quat_trans(&scaled, &options),
        Err(DqError::NotUnitQuaternion { .. })
    ));
}

#[test]
fn test_options_json_roundtrip() {
    init_logging();

    let options = ConversionOptions::new()
        .with_validation(true)
        .with_translation_scaling(TranslationScaling::SquaredLength);
    let json = options.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["translation_scaling"], "SquaredLength");
    assert_eq!(ConversionOptions::from_json(&json).unwrap(), options);

    assert!(matches!(
        ConversionOptions::from_json(r#"{ "unit_tolerance": "loose" }"#),
        Err(DqError::JsonError(_))
    ));
}

#[test]
fn test_raw_buffer_roundtrip() {
    init_logging();

    let transforms = [
        RigidTransform::identity(),
        RigidTransform::from_translation(Vec3::new(2.0, 3.0, 4.0)),
        RigidTransform::new(Quat::from_rotation_z(1.0), Vec3::new(-1.0, 0.0, 5.0)),
    ];
    let raw: Vec<DualQuatRaw> = transforms
        .iter()
        .map(|t| DualQuatRaw::from(t.to_dual_quat()))
        .collect();

    let floats: &[f32] = bytemuck::cast_slice(&raw);
    assert_eq!(floats.len(), transforms.len() * 8);
    assert_eq!(&floats[8..16], &[1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.5, 2.0]);

    for (transform, raw) in transforms.iter().zip(&raw) {
        let back = RigidTransform::from_unit_dual_quat(&DualQuat::from(*raw));
        assert_eq!(back.rotation, transform.rotation);
        assert!((back.translation - transform.translation).length() < 1e-5);
    }
}

#[test]
fn test_non_finite_input_is_rejected() {
    init_logging();

    let huge = quat_trans_to_udq(Quat::IDENTITY, Vec3::new(1.0, 2.0, 3.0)) * 1e20;
    assert!(matches!(
        dq_to_quat_trans(&huge),
        Err(DqError::DegenerateInput { .. })
    ));
    assert!(huge.normalize().is_err());

    let inf = DualQuat::from_arrays([[f32::INFINITY, 0.0, 0.0, 0.0], [0.0; 4]]);
    assert!(dq_to_quat_trans_arrays(inf.to_arrays()).is_err());
}

#[test]
fn test_builder_options_are_validated() {
    init_logging();

    let zero = DualQuat::from_arrays([[0.0; 4], [0.0; 4]]);
    let negative = ConversionOptions::new().with_degenerate_epsilon(-1.0);
    let nan = ConversionOptions::new().with_degenerate_epsilon(f32::NAN);
    for options in [negative, nan] {
        assert!(matches!(
            dq_to_quat_trans_with(&zero, &options),
            Err(DqError::InvalidOptions(_))
        ));
        assert!(RigidTransform::try_from_dual_quat(&zero, &options).is_err());
    }
}

#[test]
fn test_dual_quat_point_transform_and_normalize() {
    init_logging();

    let transform = RigidTransform::new(Quat::from_rotation_y(0.7), Vec3::new(3.0, -1.0, 2.0));
    let dq = transform.to_dual_quat() * 5.0;

    let unit = dq.normalize().unwrap();
    let p = Vec3::new(0.5, 1.0, -2.0);
    assert!((unit.transform_point(p) - transform.transform_point(p)).length() < 1e-5);

    let mut moved = unit;
    moved.set_translation(Vec3::ZERO);
    assert!((moved.transform_point(p) - transform.rotation * p).length() < 1e-5);
    assert!(unit.to_string().starts_with("real: ("));
}
