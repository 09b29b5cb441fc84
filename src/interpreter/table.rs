/// One integer slot per letter, all zero until assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
	slots: [i64; 26],
}

impl SymbolTable {
	pub fn new() -> Self { Self::default() }

	/// The value held by `name`; letters are case-insensitive.
	pub fn get(&self, name: char) -> Option<i64> { Self::slot(name).map(|slot| self.slots[slot]) }

	/// Overwrite `name`, returning the previous value.
	pub fn set(&mut self, name: char, value: i64) -> Option<i64> {
		Self::slot(name).map(|slot| std::mem::replace(&mut self.slots[slot], value))
	}

	fn slot(name: char) -> Option<usize> {
		name.is_ascii_alphabetic().then(|| usize::from(name.to_ascii_uppercase() as u8 - b'A'))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slots_start_at_zero() {
		let table = SymbolTable::new();
		assert!(('A'..='Z').all(|name| table.get(name) == Some(0)));
	}

	#[test]
	fn names_fold_case() {
		let mut table = SymbolTable::new();
		assert_eq!(table.set('q', 9), Some(0));
		assert_eq!(table.get('Q'), Some(9));
		assert_eq!(table.set('Q', -4), Some(9));
		assert_eq!(table.get('q'), Some(-4));
	}

	#[test]
	fn non_letters_have_no_slot() {
		let mut table = SymbolTable::new();
		assert_eq!(table.get('1'), None);
		assert_eq!(table.set('_', 1), None);
	}
}
