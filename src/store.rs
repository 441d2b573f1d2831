//! 任务列表核心状态
//!
//! `TodoStore` 持有有序任务列表和 id 计数器，提供唯一合法的三个变更操作
//! （add / toggle / remove）。不做任何 I/O，不校验文本内容。

/// 单条任务数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// 任务 ID（全生命周期唯一，删除后不复用）
    pub id: u64,
    /// 任务文本（创建后不可修改）
    pub text: String,
    /// 完成标记（唯一可变字段，仅通过 toggle 翻转）
    pub done: bool,
}

/// 默认种子任务（每次会话启动时的初始列表）
const SEED_TASKS: &[&str] = &["Wash dishes", "Do Laundry", "Take a shower"];

/// 任务列表存储
///
/// id 计数器由 store 自己持有，单调递增，即使任务被删除也永不回退。
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoStore {
    /// 创建带种子任务的 store（id 1..=3，全部未完成）
    pub fn new() -> Self {
        let todos: Vec<Todo> = SEED_TASKS
            .iter()
            .enumerate()
            .map(|(i, text)| Todo {
                id: (i + 1) as u64,
                text: text.to_string(),
                done: false,
            })
            .collect();
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0);

        Self { todos, next_id }
    }

    /// 创建空 store（测试用）
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 0,
        }
    }

    /// 添加任务，返回分配的 id
    ///
    /// 不校验文本：空字符串也是合法任务。新 id 严格大于历史上所有 id。
    pub fn add(&mut self, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.todos.push(Todo {
            id: self.next_id,
            text: text.into(),
            done: false,
        });
        self.next_id
    }

    /// 翻转指定任务的完成标记
    ///
    /// id 不存在时静默无操作。列表整体替换，其他任务位置不变。
    pub fn toggle(&mut self, id: u64) {
        self.todos = self
            .todos
            .iter()
            .map(|t| {
                if t.id == id {
                    Todo {
                        done: !t.done,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect();
    }

    /// 删除指定任务
    ///
    /// id 不存在时静默无操作。调用方必须先经过用户确认（见 event 层），
    /// store 本身永远不发起确认。
    pub fn remove(&mut self, id: u64) {
        self.todos = self
            .todos
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
    }

    /// 当前任务列表（插入顺序即显示顺序）
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// 任务数量
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// 列表是否为空
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// 按 id 查找任务
    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_three_tasks() {
        let store = TodoStore::new();
        assert_eq!(store.len(), 3);

        let ids: Vec<u64> = store.todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert_eq!(store.todos()[0].text, "Wash dishes");
        assert_eq!(store.todos()[1].text, "Do Laundry");
        assert_eq!(store.todos()[2].text, "Take a shower");
        assert!(store.todos().iter().all(|t| !t.done));
    }

    #[test]
    fn test_add_appends_with_next_id() {
        let mut store = TodoStore::new();
        let id = store.add("Buy milk");

        assert_eq!(id, 4);
        assert_eq!(store.len(), 4);

        let last = store.todos().last().unwrap();
        assert_eq!(last.id, 4);
        assert_eq!(last.text, "Buy milk");
        assert!(!last.done);
    }

    #[test]
    fn test_add_accepts_empty_text() {
        // 当前行为：空文本是合法任务（不做校验）
        let mut store = TodoStore::new();
        let id = store.add("");

        assert_eq!(store.len(), 4);
        assert_eq!(store.get(id).unwrap().text, "");
    }

    #[test]
    fn test_add_increases_length_by_one() {
        let mut store = TodoStore::empty();
        for i in 0..10 {
            assert_eq!(store.len(), i);
            store.add(format!("task {}", i));
        }
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn test_ids_are_monotonic_and_unique() {
        let mut store = TodoStore::new();
        let mut issued: Vec<u64> = store.todos().iter().map(|t| t.id).collect();

        for i in 0..8 {
            let id = store.add(format!("task {}", i));
            // 新 id 严格大于历史上所有 id
            assert!(issued.iter().all(|&prev| id > prev));
            issued.push(id);
        }
    }

    #[test]
    fn test_id_not_reused_after_remove() {
        let mut store = TodoStore::new();
        let id = store.add("Buy milk"); // id 4
        store.remove(id);

        // 删除后计数器不回退
        let next = store.add("Walk the dog");
        assert_eq!(next, 5);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut store = TodoStore::new();
        store.toggle(2);

        assert!(!store.get(1).unwrap().done);
        assert!(store.get(2).unwrap().done);
        assert!(!store.get(3).unwrap().done);
    }

    #[test]
    fn test_double_toggle_restores_original() {
        let mut store = TodoStore::new();
        store.toggle(3);
        let after_one = store.todos().to_vec();
        store.toggle(3);
        store.toggle(3);

        assert_eq!(store.todos(), &after_one[..]);

        store.toggle(3);
        assert!(store.todos().iter().all(|t| !t.done));
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let mut store = TodoStore::new();
        let before = store.todos().to_vec();
        store.toggle(99);
        assert_eq!(store.todos(), &before[..]);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut store = TodoStore::new();
        let before = store.todos().to_vec();
        store.remove(99);
        assert_eq!(store.todos(), &before[..]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = TodoStore::new();
        store.add("Buy milk");
        store.remove(2);

        let ids: Vec<u64> = store.todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_toggle_preserves_order() {
        let mut store = TodoStore::new();
        store.toggle(1);
        store.toggle(3);

        let ids: Vec<u64> = store.todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_scenario_add_toggle_remove() {
        // spec 场景：种子列表 → add → toggle(2) → remove(1)
        let mut store = TodoStore::new();

        let id = store.add("Buy milk");
        assert_eq!(id, 4);
        assert_eq!(store.len(), 4);

        store.toggle(2);
        assert!(store.get(2).unwrap().done);
        assert!(!store.get(1).unwrap().done);
        assert!(!store.get(3).unwrap().done);
        assert!(!store.get(4).unwrap().done);

        store.remove(1);
        assert_eq!(store.len(), 3);
        let ids: Vec<u64> = store.todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
        assert!(store.get(2).unwrap().done);
    }

    #[test]
    fn test_remove_all_yields_empty() {
        let mut store = TodoStore::new();
        for id in [1, 2, 3] {
            store.remove(id);
        }
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
