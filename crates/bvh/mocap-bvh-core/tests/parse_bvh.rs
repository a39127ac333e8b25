//! End-to-end parses of the fixture clips, checked against hand-computed
//! transforms.

use std::f64::consts::FRAC_PI_4;

use approx::assert_abs_diff_eq;
use mocap_bvh_core::{parse_bvh, parse_bvh_file, parse_bvh_reader, Channel, JointTransform};

fn clip(name: &str) -> String {
    mocap_test_fixtures::clips::source(name).expect("fixture clip should load")
}

fn assert_transform(transform: &JointTransform, rotation: [f64; 4], translation: [f64; 3]) {
    for (actual, expected) in transform.rotation.iter().zip(rotation) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 1e-6);
    }
    for (actual, expected) in transform.translation.iter().zip(translation) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 1e-6);
    }
}

#[test]
fn resolves_the_two_joint_wave_clip() {
    let document = parse_bvh(&clip("two_joint_wave")).expect("clip should parse");

    assert_eq!(document.joint_count(), 2);
    assert_eq!(document.joint_names, ["Root", "Foo"]);
    assert_eq!(document.joint_parents, [None, Some(0)]);
    assert_eq!(document.joint_offsets[0], [0.0, 0.0, 0.0]);
    assert_eq!(document.joint_offsets[1], [0.0, 0.0, 1.0]);
    assert_eq!(document.joint_channel_counts, [6, 3]);

    let root = document.joint_channels[0];
    assert_eq!(root.channel(0), Some(Channel::XPosition));
    assert_eq!(root.channel(1), Some(Channel::YPosition));
    assert_eq!(root.channel(2), Some(Channel::ZPosition));
    assert_eq!(root.channel(3), Some(Channel::XRotation));
    assert_eq!(root.channel(4), Some(Channel::YRotation));
    assert_eq!(root.channel(5), Some(Channel::ZRotation));
    assert_eq!(root.channel(6), None);

    let foo = document.joint_channels[1];
    assert_eq!(foo.channel(0), Some(Channel::XRotation));
    assert_eq!(foo.channel(1), Some(Channel::YRotation));
    assert_eq!(foo.channel(2), Some(Channel::ZRotation));
    assert_eq!(foo.channel(3), None);

    assert_abs_diff_eq!(document.frame_time, 0.041667, epsilon = 1e-9);
    assert_eq!(document.frame_count(), 20);
    assert_eq!(document.frame_transforms.len(), 40);

    // Frame 0 holds identity rotations at the static offsets.
    let first = document.frame(0);
    assert_transform(&first[0], [0.0, 0.0, 0.0, 1.0], [0.0, 0.0, 0.0]);
    assert_transform(&first[1], [0.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0]);

    // The clip sweeps the root to a 90 degree X rotation one unit up, and
    // the child to a 90 degree Y rotation.
    let half = FRAC_PI_4;
    let last = document.frame(19);
    assert_transform(
        &last[0],
        [half.sin(), 0.0, 0.0, half.cos()],
        [0.0, 1.0, 0.0],
    );
    assert_transform(
        &last[1],
        [0.0, half.sin(), 0.0, half.cos()],
        [0.0, 0.0, 1.0],
    );
}

#[test]
fn resolves_sibling_joints_and_declaration_order() {
    let document = parse_bvh(&clip("limb_chain")).expect("clip should parse");

    assert_eq!(document.joint_names, ["Hips", "LeftLeg", "RightLeg"]);
    assert_eq!(document.joint_parents, [None, Some(0), Some(0)]);
    assert_eq!(document.joint_channel_counts, [3, 2, 2]);
    assert_eq!(document.frame_count(), 2);

    // Position samples add on top of the static offset.
    let first = document.frame(0);
    assert_transform(&first[0], [0.0, 0.0, 0.0, 1.0], [1.0, 3.0, 3.0]);
    assert_transform(&first[1], [0.0, 0.0, 0.0, 1.0], [0.5, -1.0, 0.0]);
    assert_transform(&first[2], [0.0, 0.0, 0.0, 1.0], [-0.5, -1.0, 0.0]);

    // Both legs sample 90/90, but LeftLeg declares Xrotation Zrotation and
    // RightLeg declares Zrotation Xrotation: the composed orientations must
    // differ because composition follows declaration order.
    let last = document.frame(1);
    assert_transform(&last[0], [0.0, 0.0, 0.0, 1.0], [-1.0, 1.5, 0.25]);
    assert_transform(&last[1], [0.5, -0.5, 0.5, 0.5], [0.5, -1.0, 0.0]);
    assert_transform(&last[2], [0.5, 0.5, 0.5, 0.5], [-0.5, -1.0, 0.0]);
    assert!(last[1].rotation != last[2].rotation);
}

#[test]
fn every_fixture_clip_upholds_document_invariants() {
    for name in mocap_test_fixtures::clips::keys() {
        let document = parse_bvh(&clip(&name)).expect("fixture clips are valid");
        let joints = document.joint_count();
        assert_eq!(document.joint_parents.len(), joints);
        assert_eq!(document.joint_offsets.len(), joints);
        assert_eq!(document.joint_channel_counts.len(), joints);
        assert_eq!(document.joint_channels.len(), joints);

        assert_eq!(document.joint_parents[0], None, "joint 0 is the root");
        for (index, parent) in document.joint_parents.iter().enumerate().skip(1) {
            assert!(
                parent.is_some_and(|p| p < index),
                "parent of joint {index} in '{name}' must point strictly backwards"
            );
        }

        assert_eq!(
            document.frame_transforms.len(),
            document.frame_count() * joints
        );
    }
}

#[test]
fn file_and_reader_entry_points_match_the_string_parse() {
    let source = clip("two_joint_wave");
    let from_str = parse_bvh(&source).expect("string parse");

    let path = mocap_test_fixtures::clips::path("two_joint_wave").expect("fixture path");
    let from_file = parse_bvh_file(path).expect("file parse");
    assert_eq!(from_str, from_file);

    let from_reader = parse_bvh_reader(source.as_bytes()).expect("reader parse");
    assert_eq!(from_str, from_reader);
}

#[test]
fn documents_round_trip_through_serde() {
    let document = parse_bvh(&clip("limb_chain")).expect("clip should parse");
    let json = serde_json::to_string(&document).expect("serialize");
    let restored: mocap_bvh_core::BvhDocument = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(document, restored);
}
