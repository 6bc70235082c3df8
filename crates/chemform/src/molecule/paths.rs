use crate::{Molecule, NodeId, Result};

impl Molecule<'_> {
    /// Checks if there is any chain of bonds leading from `from` to `to`
    ///
    /// # Errors
    ///
    /// Returns [`ChemformError::NodeLookup`](crate::ChemformError::NodeLookup) if either node isn't in this molecule.
    pub fn is_connected(&self, from: NodeId, to: NodeId) -> Result<bool> {
        Ok(!self.find_path(from, to)?.is_empty())
    }

    /// Finds a path of bonded nodes leading from `from` to `to`, returning the nodes along the path (including both
    /// ends) or an empty path if the nodes aren't connected
    ///
    /// The search is depth-first, visiting neighbors in order of increasing node id, so the path found isn't always
    /// the shortest one.
    ///
    /// # Errors
    ///
    /// Returns [`ChemformError::NodeLookup`](crate::ChemformError::NodeLookup) if either node isn't in this molecule.
    pub fn find_path(&self, from: NodeId, to: NodeId) -> Result<Vec<NodeId>> {
        self.node(to)?;
        let start = self.node(from)?;
        if from == to {
            return Ok(vec![from]);
        }

        let mut visited = vec![false; self.order()];
        visited[from] = true;
        let mut path = vec![from];
        let mut frontier = vec![start.neighbors.keys()];
        while let Some(neighbors) = frontier.last_mut() {
            if let Some(&next) = neighbors.next() {
                if next == to {
                    path.push(next);
                    return Ok(path);
                }
                if !visited[next] {
                    visited[next] = true;
                    path.push(next);
                    frontier.push(self.nodes[next].neighbors.keys());
                }
            } else {
                frontier.pop();
                path.pop();
            }
        }

        Ok(Vec::new())
    }
}
