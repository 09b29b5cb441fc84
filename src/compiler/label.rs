use std::{
	collections::HashSet,
	fmt::{self, Display},
};

use anyhow::ensure;
use tracing::trace;

/// A branch target name, `L` followed by a zero-padded counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(usize);

impl Display for Label {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "L{:02}", self.0) }
}

/// Hands out unique labels and remembers which ones have been placed.
#[derive(Debug, Default)]
pub struct LabelAllocator {
	next:   usize,
	posted: HashSet<Label>,
}

impl LabelAllocator {
	pub fn new() -> Self { Self::default() }

	/// Allocate a label no earlier call returned.
	pub fn allocate(&mut self) -> Label {
		let label = Label(self.next);
		self.next += 1;
		trace!(%label, "allocated label");
		label
	}

	/// Record that `label` is being defined; each label may be defined once.
	pub fn post(&mut self, label: Label) -> anyhow::Result<()> {
		ensure!(label.0 < self.next, "label {label} was never allocated");
		ensure!(self.posted.insert(label), "label {label} posted twice");
		Ok(())
	}

	/// How many labels have been allocated so far.
	pub fn allocated(&self) -> usize { self.next }

	/// How many labels have been defined so far.
	pub fn posted(&self) -> usize { self.posted.len() }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn labels_are_unique_and_padded() {
		let mut labels = LabelAllocator::new();
		let first = labels.allocate();
		let second = labels.allocate();
		assert_ne!(first, second);
		assert_eq!(first.to_string(), "L00");
		assert_eq!(second.to_string(), "L01");
		assert_eq!(labels.allocated(), 2);
	}

	#[test]
	fn wide_counters_keep_growing() {
		let mut labels = LabelAllocator::new();
		let last = (0..=100).map(|_| labels.allocate()).last().unwrap();
		assert_eq!(last.to_string(), "L100");
	}

	#[test]
	fn a_label_is_posted_once() {
		let mut labels = LabelAllocator::new();
		let label = labels.allocate();
		assert!(labels.post(label).is_ok());
		assert!(labels.post(label).is_err());
		assert_eq!(labels.posted(), 1);
	}

	#[test]
	fn foreign_labels_are_rejected() {
		let mut labels = LabelAllocator::new();
		assert!(labels.post(Label(3)).is_err());
	}
}
