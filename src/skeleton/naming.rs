use rustc_hash::FxHashMap;

/// Node index ↔ joint name table.
///
/// Populated once by the skeleton builder and read-only afterwards; the
/// animation resampler uses it to route channels to joints and to recover a
/// joint's source node for bind-pose keys.
#[derive(Debug, Clone, Default)]
pub struct JointNaming {
    names: FxHashMap<usize, String>,
    nodes: FxHashMap<String, usize>,
}

impl JointNaming {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a unique, non-empty joint name to node `index`.
    ///
    /// Unnamed nodes become `gltf_node_<index>`; a name already taken by
    /// another node gets `_<index>` appended. Both cases are repaired with a
    /// warning. Assigning the same node twice returns the existing name.
    pub fn assign(&mut self, index: usize, node_name: &str) -> String {
        if let Some(name) = self.names.get(&index) {
            return name.clone();
        }

        let mut name = if node_name.is_empty() {
            let name = format!("gltf_node_{index}");
            log::warn!("Joint at node #{index} has no name, setting name to '{name}'");
            name
        } else {
            node_name.to_string()
        };

        while let Some(&other) = self.nodes.get(&name) {
            let renamed = format!("{name}_{index}");
            log::warn!(
                "Joint at node #{index} has the same name as node #{other}, renaming it to '{renamed}'"
            );
            name = renamed;
        }

        self.nodes.insert(name.clone(), index);
        self.names.insert(index, name.clone());
        name
    }

    #[must_use]
    pub fn name_of(&self, node: usize) -> Option<&str> {
        self.names.get(&node).map(String::as_str)
    }

    #[must_use]
    pub fn node_of(&self, name: &str) -> Option<usize> {
        self.nodes.get(name).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_plain_name() {
        let mut naming = JointNaming::new();
        assert_eq!(naming.assign(0, "hips"), "hips");
        assert_eq!(naming.node_of("hips"), Some(0));
        assert_eq!(naming.name_of(0), Some("hips"));
    }

    #[test]
    fn test_assign_empty_name() {
        let mut naming = JointNaming::new();
        assert_eq!(naming.assign(7, ""), "gltf_node_7");
    }

    #[test]
    fn test_assign_duplicate_name() {
        let mut naming = JointNaming::new();
        assert_eq!(naming.assign(2, "bone"), "bone");
        assert_eq!(naming.assign(5, "bone"), "bone_5");
        assert_eq!(naming.node_of("bone_5"), Some(5));
        assert_eq!(naming.len(), 2);
    }

    #[test]
    fn test_assign_is_idempotent() {
        let mut naming = JointNaming::new();
        assert_eq!(naming.assign(3, "arm"), "arm");
        assert_eq!(naming.assign(3, "arm"), "arm");
        assert_eq!(naming.len(), 1);
    }

    #[test]
    fn test_assign_collision_with_suffixed_name() {
        let mut naming = JointNaming::new();
        assert_eq!(naming.assign(1, "a_4"), "a_4");
        assert_eq!(naming.assign(2, "a"), "a");
        // "a" -> "a_4" is taken by node 1 -> "a_4_4"
        assert_eq!(naming.assign(4, "a"), "a_4_4");
    }
}
