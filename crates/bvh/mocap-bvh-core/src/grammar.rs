//! Hand-written recursive grammar for the BVH format.
//!
//! Grammar:
//! ```text
//! document   := "HIERARCHY" "ROOT" name jointBody "MOTION" motionBody
//! jointBody  := "{" offset channels (endSite | joint*) "}"
//! offset     := "OFFSET" double double double
//! channels   := "CHANNELS" uint channelName{uint}
//! endSite    := "End Site" "{" offset "}"
//! joint      := "JOINT" name jointBody
//! name       := alphanumeric+
//! motionBody := "Frames:" uint "Frame Time:" double sample{frameCount}
//! ```
//! Whitespace is optional and skipped between tokens. Parsers consume a
//! prefix of the input and populate the document in the same pass; there is
//! no separate build phase. A failed subtree leaves its already-appended
//! joints behind — the orchestrator discards the whole document when the
//! overall parse fails.

use crate::cursor::Cursor;
use crate::document::{BvhDocument, Channel, ChannelLayout};
use crate::number::{parse_double, parse_uint};
use crate::transform::{quat_about_x, quat_about_y, quat_about_z, quat_mul, JointTransform};

/// Whitespace skipped between tokens.
pub(crate) const WHITESPACE: &str = " \t\r\n";

/// Characters a joint name may consist of.
pub(crate) const ALPHANUMERIC: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// `name := alphanumeric+`, captured into `out`.
pub(crate) fn joint_name<'a>(cursor: Cursor<'a>, out: &mut &'a str) -> Cursor<'a> {
    cursor.capture(out, |c| c.at_least(1, |c| c.one_of(ALPHANUMERIC)))
}

/// `offset := "OFFSET" double double double`
fn joint_offset(cursor: Cursor<'_>) -> (Cursor<'_>, [f64; 3]) {
    let cursor = cursor.tag("OFFSET").skip(WHITESPACE);
    let (cursor, x) = parse_double(cursor);
    let (cursor, y) = parse_double(cursor.skip(WHITESPACE));
    let (cursor, z) = parse_double(cursor.skip(WHITESPACE));
    (cursor.skip(WHITESPACE), [x, y, z])
}

/// `channelName := "Xposition" | ... | "Zrotation"`
fn channel_name(cursor: Cursor<'_>) -> Cursor<'_> {
    cursor.first_of(&[
        &|c| c.tag("Xposition"),
        &|c| c.tag("Yposition"),
        &|c| c.tag("Zposition"),
        &|c| c.tag("Xrotation"),
        &|c| c.tag("Yrotation"),
        &|c| c.tag("Zrotation"),
    ])
}

/// `channels := "CHANNELS" uint channelName{uint}`
///
/// Each declared channel is packed into the layout at 3 bits per position,
/// in declaration order. Counts above [`ChannelLayout::MAX_CHANNELS`] fail
/// the parse: the packed layout cannot hold them without overlapping bits.
fn joint_channels(cursor: Cursor<'_>) -> (Cursor<'_>, u32, ChannelLayout) {
    let failed = (Cursor::failed(), 0, ChannelLayout::default());

    let cursor = cursor.tag("CHANNELS").skip(WHITESPACE);
    let (cursor, count) = parse_uint(cursor);
    if !cursor.is_valid() || count > ChannelLayout::MAX_CHANNELS {
        return failed;
    }

    let mut cursor = cursor.skip(WHITESPACE);
    let mut layout = ChannelLayout::default();
    for index in 0..count {
        let mut token = "";
        cursor = cursor.skip(WHITESPACE).capture(&mut token, channel_name);
        if !cursor.is_valid() {
            return failed;
        }
        let channel = match token {
            "Xposition" => Channel::XPosition,
            "Yposition" => Channel::YPosition,
            "Zposition" => Channel::ZPosition,
            "Xrotation" => Channel::XRotation,
            "Yrotation" => Channel::YRotation,
            "Zrotation" => Channel::ZRotation,
            _ => return failed,
        };
        layout.set(index, channel);
    }
    (cursor.skip(WHITESPACE), count, layout)
}

/// `jointBody := "{" offset channels (endSite | joint*) "}"`
///
/// Fills in the already-appended record at `joint`, then descends. Each
/// child record is appended *before* recursing into its body, so parent
/// indices always point strictly backwards. `End Site` is tried before the
/// child-joint repetition; its offset is terminal geometry, consumed
/// without appending a joint record.
pub(crate) fn joint_subtree<'a>(
    cursor: Cursor<'a>,
    joint: usize,
    document: &mut BvhDocument,
) -> Cursor<'a> {
    let cursor = cursor.byte(b'{').skip(WHITESPACE);
    let (cursor, offset) = joint_offset(cursor);
    let (cursor, count, layout) = joint_channels(cursor);
    if !cursor.is_valid() {
        return Cursor::failed();
    }
    document.joint_offsets[joint] = offset;
    document.joint_channel_counts[joint] = count;
    document.joint_channels[joint] = layout;

    let end_site = cursor
        .tag("End Site")
        .skip(WHITESPACE)
        .byte(b'{')
        .skip(WHITESPACE);
    let cursor = if end_site.is_valid() {
        let (cursor, _offset) = joint_offset(end_site);
        cursor.byte(b'}').skip(WHITESPACE)
    } else {
        cursor.at_least(0, |c| {
            let mut name = "";
            let child = joint_name(c.tag("JOINT").skip(WHITESPACE), &mut name).skip(WHITESPACE);
            if !child.is_valid() {
                return Cursor::failed();
            }
            let index = document.push_joint(name, Some(joint));
            joint_subtree(child, index, document)
        })
    };
    cursor.byte(b'}').skip(WHITESPACE)
}

/// `motionBody := "Frames:" uint "Frame Time:" double sample{frameCount}`
///
/// For every frame, for every joint in document order, one double is
/// consumed per declared channel and folded into a transform seeded with
/// the identity rotation at the joint's static offset. Position samples
/// add to the translation; rotation samples are converted to single-axis
/// quaternions and post-multiplied in declaration order — composing
/// X-then-Y differs from Y-then-X, so the declared order is authoritative.
pub(crate) fn motion<'a>(cursor: Cursor<'a>, document: &mut BvhDocument) -> Cursor<'a> {
    let cursor = cursor.tag("MOTION").skip(WHITESPACE);

    let cursor = cursor.tag("Frames:").skip(WHITESPACE);
    let (cursor, frame_count) = parse_uint(cursor);

    let cursor = cursor.skip(WHITESPACE).tag("Frame Time:").skip(WHITESPACE);
    let (cursor, frame_time) = parse_double(cursor);
    let mut cursor = cursor.skip(WHITESPACE);
    document.frame_time = frame_time;

    for _ in 0..frame_count {
        if !cursor.is_valid() {
            return Cursor::failed();
        }
        for joint in 0..document.joint_count() {
            let layout = document.joint_channels[joint];
            let mut transform = JointTransform::at_offset(document.joint_offsets[joint]);
            for index in 0..document.joint_channel_counts[joint] {
                let (next, value) = parse_double(cursor);
                cursor = next.skip(WHITESPACE);
                match layout.channel(index) {
                    Some(Channel::XPosition) => transform.translation[0] += value,
                    Some(Channel::YPosition) => transform.translation[1] += value,
                    Some(Channel::ZPosition) => transform.translation[2] += value,
                    Some(Channel::XRotation) => {
                        transform.rotation = quat_mul(transform.rotation, quat_about_x(value));
                    }
                    Some(Channel::YRotation) => {
                        transform.rotation = quat_mul(transform.rotation, quat_about_y(value));
                    }
                    Some(Channel::ZRotation) => {
                        transform.rotation = quat_mul(transform.rotation, quat_about_z(value));
                    }
                    None => {}
                }
            }
            document.frame_transforms.push(transform);
        }
    }
    cursor
}
