//! registry.rs
//! Columnar node store with forward (requirement) and reverse (dependent) adjacency.

use super::error::GraphError;
use super::types::*;
use smallvec::SmallVec;

/// Most nodes have only a handful of requirements/dependents; keep them inline.
pub type Adjacency = SmallVec<[NodeId; 4]>;

#[derive(Debug, Clone, Default)]
pub struct Registry {
    // Columnar Arrays
    pub kinds: Vec<NodeKind>,
    pub direct_costs: Vec<u64>,

    // Topology: requirements (node -> what it needs) and dependents (the reverse map).
    pub requirements: Vec<Adjacency>,
    pub dependents: Vec<Adjacency>,

    edge_count: usize,
}

impl Registry {
    pub fn new() -> Self { Self::default() }
    pub fn count(&self) -> usize { self.kinds.len() }
    pub fn edge_count(&self) -> usize { self.edge_count }

    pub fn add_node(&mut self, kind: NodeKind, direct_cost: u64) -> NodeId {
        let id = NodeId::new(self.kinds.len());
        self.kinds.push(kind);
        self.direct_costs.push(direct_cost);
        self.requirements.push(Adjacency::new());
        self.dependents.push(Adjacency::new());
        id
    }

    pub fn check(&self, id: NodeId) -> Result<(), GraphError> {
        if id.index() < self.count() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange { node: id, count: self.count() })
        }
    }

    /// Inserts `dependency` into the requirement set of `dependent`.
    /// Re-inserting an existing pair leaves the graph unchanged.
    pub fn add_requirement(&mut self, dependent: NodeId, dependency: NodeId) -> Result<(), GraphError> {
        self.check(dependent)?;
        self.check(dependency)?;

        let reqs = &mut self.requirements[dependent.index()];
        if reqs.contains(&dependency) {
            return Ok(());
        }
        reqs.push(dependency);
        self.dependents[dependency.index()].push(dependent);
        self.edge_count += 1;
        Ok(())
    }

    pub fn remove_requirement(&mut self, dependent: NodeId, dependency: NodeId) -> Result<(), GraphError> {
        self.check(dependent)?;
        self.check(dependency)?;

        let reqs = &mut self.requirements[dependent.index()];
        let pos = reqs
            .iter()
            .position(|&n| n == dependency)
            .ok_or(GraphError::MissingRequirement { dependent, dependency })?;
        reqs.remove(pos);

        // Both directions are always written together.
        let deps = &mut self.dependents[dependency.index()];
        let back = deps
            .iter()
            .position(|&n| n == dependent)
            .expect("BUG: reverse edge missing for an existing requirement");
        deps.remove(back);

        self.edge_count -= 1;
        Ok(())
    }

    #[inline(always)]
    pub fn get_requirements(&self, id: NodeId) -> &[NodeId] {
        &self.requirements[id.index()]
    }

    #[inline(always)]
    pub fn get_dependents(&self, id: NodeId) -> &[NodeId] {
        &self.dependents[id.index()]
    }

    pub fn has_requirement(&self, dependent: NodeId, dependency: NodeId) -> bool {
        self.requirements
            .get(dependent.index())
            .is_some_and(|reqs| reqs.contains(&dependency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_dense_and_increasing() {
        let mut reg = Registry::new();
        let a = reg.add_node(NodeKind::Or, 0);
        let b = reg.add_node(NodeKind::And, 7);
        assert_eq!(a, NodeId(0));
        assert_eq!(b, NodeId(1));
        assert_eq!(reg.direct_costs[b.index()], 7);
    }

    #[test]
    fn test_add_and_remove_keep_reverse_map_in_sync() {
        let mut reg = Registry::new();
        let fact = reg.add_node(NodeKind::Or, 0);
        let init = reg.add_node(NodeKind::And, 0);

        reg.add_requirement(fact, init).unwrap();
        reg.add_requirement(fact, init).unwrap(); // set semantics
        assert_eq!(reg.get_requirements(fact), &[init]);
        assert_eq!(reg.get_dependents(init), &[fact]);
        assert_eq!(reg.edge_count(), 1);

        reg.remove_requirement(fact, init).unwrap();
        assert!(reg.get_requirements(fact).is_empty());
        assert!(reg.get_dependents(init).is_empty());
        assert_eq!(reg.edge_count(), 0);
    }

    #[test]
    fn test_out_of_range_ids_are_rejected() {
        let mut reg = Registry::new();
        let a = reg.add_node(NodeKind::And, 0);
        let err = reg.add_requirement(a, NodeId(5)).unwrap_err();
        assert_eq!(err, GraphError::NodeOutOfRange { node: NodeId(5), count: 1 });
    }

    #[test]
    fn test_removing_absent_edge_fails() {
        let mut reg = Registry::new();
        let a = reg.add_node(NodeKind::Or, 0);
        let b = reg.add_node(NodeKind::And, 0);
        let err = reg.remove_requirement(a, b).unwrap_err();
        assert!(err.to_string().contains("not a requirement"));
    }
}
