pub mod collection;
pub mod ring_queue;
pub mod value_set;
