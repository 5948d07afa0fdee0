use fnv::FnvHashMap;

/// A stick constraint between two points. The point at `a` created it
/// and owns it; `b` only participates in the relation.
#[derive(Clone, Copy, Debug)]
pub struct Constraint {
	pub a: usize,
	pub b: usize,
	pub rest: f32,
}

impl Constraint {
	pub fn new(a: usize, b: usize, rest: f32) -> Self {
		Self { a, b, rest }
	}
}

/// Id-keyed constraint arena. Ownership lives in the points' link
/// lists; the arena only maps ids to the pair data, so detaching one
/// side can never leave a dangling reference on the other.
#[derive(Default)]
pub struct ConstraintArena {
	slots: FnvHashMap<usize, Constraint>,
	id_alloc: usize,
}

impl ConstraintArena {
	pub fn insert(&mut self, c: Constraint) -> usize {
		let id = self.id_alloc;
		self.id_alloc += 1;
		self.slots.insert(id, c);
		id
	}

	pub fn get(&self, id: usize) -> Option<&Constraint> {
		self.slots.get(&id)
	}

	pub fn remove(&mut self, id: usize) -> Option<Constraint> {
		self.slots.remove(&id)
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}
}
