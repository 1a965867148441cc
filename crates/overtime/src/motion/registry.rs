use super::task::MotionTask;

/// Ordered storage for the in-flight tasks of one category.
/// Insertion order is the sweep order; nothing else depends on it.
#[derive(Debug, Default)]
pub struct MotionRegistry {
    tasks: Vec<MotionTask>,
}

impl MotionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tasks: Vec::with_capacity(capacity),
        }
    }

    /// Append a task.
    pub fn add(&mut self, task: MotionTask) {
        self.tasks.push(task);
    }

    /// Read view of all tasks, in insertion order.
    pub fn all(&self) -> &[MotionTask] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &MotionTask> {
        self.tasks.iter()
    }

    /// Remove the task at `index`, keeping the order of the rest.
    pub fn remove_at(&mut self, index: usize) -> Option<MotionTask> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    /// Remove every task matching `predicate`. Returns how many were removed.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&MotionTask) -> bool) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !predicate(t));
        before - self.tasks.len()
    }

    /// Index of the last task matching `predicate`.
    pub fn rposition(&self, predicate: impl FnMut(&MotionTask) -> bool) -> Option<usize> {
        self.tasks.iter().rposition(predicate)
    }

    /// Number of active tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether there are no active tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drop all tasks.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::api::types::{EntityId, MotionCategory, MotionId};
    use crate::motion::interp::MotionPath;

    fn task(id: u64, owner: u32) -> MotionTask {
        MotionTask::new(
            MotionId(id),
            EntityId(owner),
            MotionCategory::Move,
            MotionPath::Vector { from: Vec3::ZERO, to: Vec3::ONE },
            0.0,
            100.0,
        )
    }

    #[test]
    fn keeps_insertion_order() {
        let mut reg = MotionRegistry::new();
        reg.add(task(3, 1));
        reg.add(task(1, 2));
        reg.add(task(2, 3));
        let ids: Vec<_> = reg.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn remove_at_preserves_order() {
        let mut reg = MotionRegistry::new();
        for i in 1..=4 {
            reg.add(task(i, i as u32));
        }
        let removed = reg.remove_at(1).unwrap();
        assert_eq!(removed.id, MotionId(2));
        let ids: Vec<_> = reg.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, [1, 3, 4]);
        assert!(reg.remove_at(10).is_none());
    }

    #[test]
    fn remove_where_counts_matches() {
        let mut reg = MotionRegistry::new();
        reg.add(task(1, 7));
        reg.add(task(2, 8));
        reg.add(task(3, 7));
        assert_eq!(reg.remove_where(|t| t.owner == EntityId(7)), 2);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.all()[0].id, MotionId(2));
    }

    #[test]
    fn rposition_finds_last_match() {
        let mut reg = MotionRegistry::new();
        reg.add(task(1, 7));
        reg.add(task(2, 7));
        assert_eq!(reg.rposition(|t| t.owner == EntityId(7)), Some(1));
        assert_eq!(reg.rposition(|t| t.owner == EntityId(9)), None);
    }
}
