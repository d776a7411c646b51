//! Configuration merging.

use serde_json::{Map, Value};

/// How two configuration layers combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Recurse into object/object collisions; later scalars win.
    Deep,
    /// Top-level keys only; later values win wholesale.
    Shallow,
}

/// Merge `overlay` into `base` under `strategy`.
pub fn merge_into(base: &mut Map<String, Value>, overlay: Map<String, Value>, strategy: MergeStrategy) {
    for (key, value) in overlay {
        match (strategy, base.get_mut(&key), value) {
            (MergeStrategy::Deep, Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_into(existing, incoming, strategy);
            }
            (_, _, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn deep_merge_recurses_into_objects() {
        let mut base = obj(json!({"db": {"host": "a", "port": 1}, "debug": false}));
        merge_into(
            &mut base,
            obj(json!({"db": {"port": 2}, "debug": true})),
            MergeStrategy::Deep,
        );
        assert_eq!(
            Value::Object(base),
            json!({"db": {"host": "a", "port": 2}, "debug": true})
        );
    }

    #[test]
    fn shallow_merge_replaces_objects_wholesale() {
        let mut base = obj(json!({"db": {"host": "a", "port": 1}}));
        merge_into(
            &mut base,
            obj(json!({"db": {"port": 2}})),
            MergeStrategy::Shallow,
        );
        assert_eq!(Value::Object(base), json!({"db": {"port": 2}}));
    }

    #[test]
    fn scalar_object_collision_takes_overlay() {
        let mut base = obj(json!({"x": 1}));
        merge_into(&mut base, obj(json!({"x": {"y": 2}})), MergeStrategy::Deep);
        assert_eq!(Value::Object(base), json!({"x": {"y": 2}}));
    }
}
