//! Slot arena holding deque nodes
//!
//! Vacated slots are chained into a free list and handed out again before
//! the backing vector grows, so steady push/pop traffic does not allocate.

/// Index of a slot in the arena
pub type SlotId = usize;

/// A deque node with links to its neighbours
#[derive(Clone, Debug, PartialEq)]
pub struct Node<T> {
    /// The stored element
    pub value: T,

    /// Previous node (None if this is the head)
    pub prev: Option<SlotId>,

    /// Next node (None if this is the tail)
    pub next: Option<SlotId>,
}

impl<T> Node<T> {
    pub fn new(value: T, prev: Option<SlotId>, next: Option<SlotId>) -> Self {
        Self { value, prev, next }
    }
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<SlotId> },
}

/// Arena of node slots with an intrusive free list
#[derive(Clone, Debug)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,

    /// Most recently vacated slot
    free_head: Option<SlotId>,

    /// Number of occupied slots
    len: usize,
}

impl<T> NodeArena<T> {
    /// Create an empty arena without allocating
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Create an empty arena with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots the backing vector can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of slots ever handed out (occupied plus vacant)
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Store a node, reusing a vacant slot when one is available
    pub fn insert(&mut self, node: Node<T>) -> SlotId {
        self.len += 1;

        if let Some(id) = self.free_head
            && let Some(Slot::Vacant { next_free }) = self.slots.get(id)
        {
            self.free_head = *next_free;
            self.slots[id] = Slot::Occupied(node);
            return id;
        }

        self.slots.push(Slot::Occupied(node));
        self.slots.len() - 1
    }

    /// Take the node out of `id`, leaving the slot on the free list
    pub fn remove(&mut self, id: SlotId) -> Option<Node<T>> {
        let slot = self.slots.get_mut(id)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }

        let vacated = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id);
        self.len -= 1;

        match vacated {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get(&self, id: SlotId) -> Option<&Node<T>> {
        match self.slots.get(id)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Drop every node; the backing allocation is kept
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
