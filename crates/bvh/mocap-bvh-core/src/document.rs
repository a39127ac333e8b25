//! Resolved motion-capture document model.
//!
//! Joints live in parallel arrays sharing one index space (an
//! arena-with-indices layout): records are append-only and parent indices
//! always point strictly backwards, so cycles are unrepresentable by
//! construction. The document is populated by the grammar in a single pass
//! and read-only afterwards.

use serde::{Deserialize, Serialize};

use crate::transform::JointTransform;

/// One animated degree of freedom, identified by its 3-bit channel code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    /// Translation sample along X, code 1.
    XPosition = 1,
    /// Translation sample along Y, code 2.
    YPosition = 2,
    /// Translation sample along Z, code 3.
    ZPosition = 3,
    /// Rotation sample about X, code 4.
    XRotation = 4,
    /// Rotation sample about Y, code 5.
    YRotation = 5,
    /// Rotation sample about Z, code 6.
    ZRotation = 6,
}

impl Channel {
    /// Decode a 3-bit channel code; 0 means "no channel here".
    pub fn from_code(code: u32) -> Option<Channel> {
        match code {
            1 => Some(Channel::XPosition),
            2 => Some(Channel::YPosition),
            3 => Some(Channel::ZPosition),
            4 => Some(Channel::XRotation),
            5 => Some(Channel::YRotation),
            6 => Some(Channel::ZRotation),
            _ => None,
        }
    }

    /// The 3-bit code this channel packs to.
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// A joint's channel layout, packed 3 bits per channel in declaration
/// order starting at the least significant bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelLayout(pub u32);

impl ChannelLayout {
    /// Widest layout a packed `u32` can hold at 3 bits per channel. The
    /// grammar rejects declarations past this rather than overlapping bits.
    pub const MAX_CHANNELS: u32 = 10;

    /// Record `channel` at declaration position `index`.
    pub fn set(&mut self, index: u32, channel: Channel) {
        self.0 |= channel.code() << (3 * index);
    }

    /// Decode the channel declared at position `index`.
    pub fn channel(self, index: u32) -> Option<Channel> {
        Channel::from_code((self.0 >> (3 * index)) & 0b111)
    }
}

/// A fully resolved BVH document: joint topology, static offsets, channel
/// layouts, and per-frame per-joint transforms.
///
/// The five per-joint vectors always have identical length and share
/// indexing; joint 0 is the root (the only joint without a parent).
/// `frame_transforms` holds exactly `frame_count x joint_count` entries,
/// frame-major then joint-minor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BvhDocument {
    /// Joint names in document order; index 0 is the root.
    pub joint_names: Vec<String>,
    /// Parent index per joint, always strictly less than the joint's own
    /// index; `None` for the root.
    pub joint_parents: Vec<Option<usize>>,
    /// Static translation offset per joint, relative to its parent.
    pub joint_offsets: Vec<[f64; 3]>,
    /// Animated channel count per joint.
    pub joint_channel_counts: Vec<u32>,
    /// Packed channel layout per joint.
    pub joint_channels: Vec<ChannelLayout>,
    /// Seconds between consecutive frames.
    pub frame_time: f64,
    /// Resolved transforms, all joints of frame 0, then frame 1, etc.
    pub frame_transforms: Vec<JointTransform>,
}

impl BvhDocument {
    /// Append a joint record with zeroed offset and channels, returning its
    /// index.
    pub fn push_joint(&mut self, name: impl Into<String>, parent: Option<usize>) -> usize {
        self.joint_names.push(name.into());
        self.joint_parents.push(parent);
        self.joint_offsets.push([0.0; 3]);
        self.joint_channel_counts.push(0);
        self.joint_channels.push(ChannelLayout::default());
        self.joint_names.len() - 1
    }

    /// Number of joints in the skeleton.
    pub fn joint_count(&self) -> usize {
        self.joint_names.len()
    }

    /// Number of resolved frames.
    pub fn frame_count(&self) -> usize {
        if self.joint_names.is_empty() {
            0
        } else {
            self.frame_transforms.len() / self.joint_names.len()
        }
    }

    /// The transforms of one frame, in joint order. Panics if `frame` is
    /// out of range.
    pub fn frame(&self, frame: usize) -> &[JointTransform] {
        let joints = self.joint_count();
        &self.frame_transforms[frame * joints..(frame + 1) * joints]
    }
}
