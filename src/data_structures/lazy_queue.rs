use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

/// Monotonically increasing id handed out to each pushed entry
pub type EntryId = u64;

/// A queue entry: the distance a vertex was pushed with and the id of that push
#[derive(Debug, Clone)]
pub struct QueueEntry<V, P> {
    pub distance: P,
    pub vertex: V,
    pub id: EntryId,
}

// Ordered by (distance, id). Ids are unique, so the order is total without
// requiring anything of the vertex type.
impl<V, P: Ord> Ord for QueueEntry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl<V, P: Ord> PartialOrd for QueueEntry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: Ord> PartialEq for QueueEntry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, P: Ord> Eq for QueueEntry<V, P> {}

/// Min-priority queue with lazy deletion instead of decrease-key
///
/// Pushing a vertex that already has an entry in the heap does not touch the
/// old entry. The validity table records the id of the newest push per
/// vertex, and [`pop`](LazyQueue::pop) drops any entry whose id no longer
/// matches.
#[derive(Debug)]
pub struct LazyQueue<V, P>
where
    V: Clone + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<QueueEntry<V, P>>>,

    /// Vertex -> id of its currently valid entry
    valid_ids: HashMap<V, EntryId>,

    /// Next id to hand out
    next_id: EntryId,

    /// Entries discarded as stale so far
    stale: usize,
}

impl<V, P> Default for LazyQueue<V, P>
where
    V: Clone + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> LazyQueue<V, P>
where
    V: Clone + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        LazyQueue {
            heap: BinaryHeap::new(),
            valid_ids: HashMap::new(),
            next_id: 0,
            stale: 0,
        }
    }

    /// Creates a new empty queue sized for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        LazyQueue {
            heap: BinaryHeap::with_capacity(capacity),
            valid_ids: HashMap::with_capacity(capacity),
            next_id: 0,
            stale: 0,
        }
    }

    /// Returns true if the heap holds no entries, stale or not
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries in the heap, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Number of ids handed out so far
    pub fn pushed(&self) -> usize {
        self.next_id as usize
    }

    /// Number of stale entries discarded by `pop`
    pub fn stale_discarded(&self) -> usize {
        self.stale
    }

    /// Pushes `vertex` with `distance`, superseding any earlier entry for it
    pub fn push(&mut self, vertex: V, distance: P) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        self.valid_ids.insert(vertex.clone(), id);
        self.heap.push(Reverse(QueueEntry {
            distance,
            vertex,
            id,
        }));
        id
    }

    /// Returns true if `entry` is the newest one pushed for its vertex
    pub fn is_valid(&self, entry: &QueueEntry<V, P>) -> bool {
        self.valid_ids.get(&entry.vertex) == Some(&entry.id)
    }

    /// Removes and returns the smallest valid entry, discarding stale ones on the way
    ///
    /// A returned entry is retired: pushing the same vertex again starts a new entry.
    pub fn pop(&mut self) -> Option<QueueEntry<V, P>> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if !self.is_valid(&entry) {
                log::trace!("discarding stale entry {} for {:?}", entry.id, entry.vertex);
                self.stale += 1;
                continue;
            }
            self.valid_ids.remove(&entry.vertex);
            return Some(entry);
        }
        None
    }

    /// Returns the smallest valid entry without removing it
    pub fn peek(&mut self) -> Option<&QueueEntry<V, P>> {
        while let Some(Reverse(entry)) = self.heap.peek() {
            if self.valid_ids.get(&entry.vertex) == Some(&entry.id) {
                break;
            }
            self.heap.pop();
            self.stale += 1;
        }
        self.heap.peek().map(|Reverse(entry)| entry)
    }
}
