//! Session controller owning history, selection, and the print queue.
//!
//! Every mutation of the three pieces of view state goes through a method
//! here, so the cross-references between them stay consistent: the current
//! selection is always a history record (or nothing), and no queue slot
//! outlives the deletion of its entry.

use std::collections::HashSet;

use crate::allocator::IdAllocator;
use crate::context::ServiceContext;
use crate::error::SessionError;
use crate::model::{Entry, QueueSlotItem, SHEET_CAPACITY};
use crate::store::BarcodeStore;

/// In-memory view state backed by the barcode store.
pub struct Session<'a> {
    ctx: &'a ServiceContext,
    store: BarcodeStore<'a>,
    retry_budget: u32,
    history: Vec<Entry>,
    current: Option<Entry>,
    queue: Vec<QueueSlotItem>,
}

impl<'a> Session<'a> {
    /// Loads history and queue from the store.
    ///
    /// The most recent history entry starts out selected.
    #[must_use]
    pub fn open(ctx: &'a ServiceContext, retry_budget: u32) -> Self {
        let store = BarcodeStore::new(ctx);
        let history = store.get_history();
        let queue = store.get_queue();
        let current = history.first().cloned();
        tracing::debug!(history_len = history.len(), queue_len = queue.len(), "session opened");
        Self { ctx, store, retry_budget, history, current, queue }
    }

    /// All entries, most recent first.
    #[must_use]
    pub fn history(&self) -> &[Entry] {
        &self.history
    }

    /// The selected entry, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Entry> {
        self.current.as_ref()
    }

    /// Occupied sheet slots in order.
    #[must_use]
    pub fn queue(&self) -> &[QueueSlotItem] {
        &self.queue
    }

    /// Number of free sheet positions.
    #[must_use]
    pub fn remaining_slots(&self) -> usize {
        SHEET_CAPACITY - self.queue.len()
    }

    /// All sheet positions in order; unfilled trailing positions are `None`.
    #[must_use]
    pub fn sheet_slots(&self) -> Vec<Option<&QueueSlotItem>> {
        (0..SHEET_CAPACITY).map(|i| self.queue.get(i)).collect()
    }

    /// Looks up a history entry by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.history.iter().find(|e| e.id == id)
    }

    /// Allocates, persists, and selects a new entry.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Allocation` when no free id was drawn within the
    /// retry budget; state is left untouched.
    pub fn generate(&mut self, label: Option<&str>) -> Result<Entry, SessionError> {
        let existing: HashSet<String> = self.history.iter().map(|e| e.id.clone()).collect();
        let entry =
            IdAllocator::from_context(self.ctx, self.retry_budget).allocate(&existing, label)?;

        self.store.save_entry(&entry);
        self.history.retain(|e| e.id != entry.id);
        self.history.insert(0, entry.clone());
        self.current = Some(entry.clone());
        tracing::info!(id = %entry.id, label = entry.label.as_deref(), "generated barcode");
        Ok(entry)
    }

    /// Selects the history entry with `id`. Unknown ids are ignored.
    ///
    /// Returns whether the selection changed to that entry.
    pub fn select_entry(&mut self, id: &str) -> bool {
        match self.find(id).cloned() {
            Some(entry) => {
                self.current = Some(entry);
                true
            }
            None => {
                tracing::debug!(id, "select ignored, id not in history");
                false
            }
        }
    }

    /// Appends a placement of `entry` to the sheet.
    ///
    /// Placing the same entry several times is allowed; each placement gets
    /// its own print id.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::QueueFull` when all slots are taken, or
    /// `SessionError::NoEntry` when `entry` is `None`.
    pub fn enqueue(&mut self, entry: Option<&Entry>) -> Result<QueueSlotItem, SessionError> {
        if self.queue.len() >= SHEET_CAPACITY {
            return Err(SessionError::QueueFull { capacity: SHEET_CAPACITY });
        }
        let entry = entry.ok_or(SessionError::NoEntry)?;
        let item = QueueSlotItem::new(entry, self.ctx.id_gen.generate_id());
        self.queue.push(item.clone());
        self.store.save_queue(&self.queue);
        tracing::debug!(id = %item.id(), print_id = %item.print_id, queue_len = self.queue.len(), "slot added");
        Ok(item)
    }

    /// Places the current selection on the sheet.
    ///
    /// # Errors
    ///
    /// Same as [`Session::enqueue`].
    pub fn enqueue_current(&mut self) -> Result<QueueSlotItem, SessionError> {
        let current = self.current.clone();
        self.enqueue(current.as_ref())
    }

    /// Places the history entry with `id` on the sheet.
    ///
    /// # Errors
    ///
    /// Same as [`Session::enqueue`]; an unknown id is `NoEntry`.
    pub fn enqueue_id(&mut self, id: &str) -> Result<QueueSlotItem, SessionError> {
        let entry = self.find(id).cloned();
        self.enqueue(entry.as_ref())
    }

    /// Removes the placement with `print_id`. Returns whether one was removed.
    pub fn dequeue(&mut self, print_id: &str) -> bool {
        let before = self.queue.len();
        self.queue.retain(|item| item.print_id != print_id);
        let removed = self.queue.len() != before;
        if removed {
            self.store.save_queue(&self.queue);
            tracing::debug!(print_id, queue_len = self.queue.len(), "slot removed");
        }
        removed
    }

    /// Empties the sheet.
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.store.save_queue(&self.queue);
        tracing::info!("print sheet cleared");
    }

    /// Deletes an entry and everything that refers to it.
    ///
    /// History is replaced by the store's post-delete list, a selection of the
    /// deleted entry moves to the new first entry, and every sheet placement of
    /// it is removed. All of this happens before the method returns.
    pub fn delete_entry(&mut self, id: &str) {
        self.history = self.store.delete_entry(id);

        if self.current.as_ref().is_some_and(|e| e.id == id) {
            self.current = self.history.first().cloned();
        }

        let before = self.queue.len();
        self.queue.retain(|item| item.id() != id);
        if self.queue.len() != before {
            self.store.save_queue(&self.queue);
        }
        tracing::info!(
            id,
            slots_removed = before - self.queue.len(),
            history_len = self.history.len(),
            "deleted barcode"
        );
    }

    /// Erases the whole history, the selection, and every sheet placement.
    pub fn clear_history(&mut self) {
        self.store.clear_history();
        self.history.clear();
        self.current = None;
        self.queue.clear();
        self.store.save_queue(&self.queue);
        tracing::info!("history cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::ScriptedRandom;
    use crate::allocator::DEFAULT_RETRY_BUDGET;
    use crate::model::ID_DIGITS;

    fn scripted(values: Vec<u64>) -> ServiceContext {
        ServiceContext::in_memory().with_random(ScriptedRandom::new(values))
    }

    #[test]
    fn generate_on_empty_history() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);

        let entry = session.generate(Some("Asset 1")).unwrap();

        assert_eq!(entry.id.len(), ID_DIGITS);
        assert!(entry.id.bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(entry.label.as_deref(), Some("Asset 1"));
        assert_eq!(session.history(), &[entry.clone()]);
        assert_eq!(session.current(), Some(&entry));
        assert_eq!(BarcodeStore::new(&ctx).get_history(), vec![entry]);
    }

    #[test]
    fn generated_id_is_new_and_then_present() {
        let ctx = scripted(vec![111_111_111, 111_111_111, 222_222_222]);
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        let first = session.generate(None).unwrap();

        let second = session.generate(None).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(second.id, "222222222");
        assert_eq!(session.history()[0], second);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn allocation_failure_leaves_state_unchanged() {
        let ctx = scripted(vec![111_111_111]);
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        let first = session.generate(Some("only")).unwrap();
        session.enqueue_current().unwrap();

        let err = session.generate(Some("second")).unwrap_err();

        assert!(matches!(err, SessionError::Allocation(f) if f.attempts == 100));
        assert_eq!(session.history(), &[first.clone()]);
        assert_eq!(session.current(), Some(&first));
        assert_eq!(session.queue().len(), 1);
        assert_eq!(BarcodeStore::new(&ctx).get_history(), vec![first]);
    }

    #[test]
    fn reopening_restores_history_queue_and_selection() {
        let ctx = scripted(vec![111_111_111, 222_222_222]);
        {
            let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
            session.generate(Some("a")).unwrap();
            session.enqueue_current().unwrap();
            session.generate(Some("b")).unwrap();
        }

        let session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);

        assert_eq!(session.history().len(), 2);
        assert_eq!(session.current().map(|e| e.id.as_str()), Some("222222222"));
        assert_eq!(session.queue().len(), 1);
        assert_eq!(session.queue()[0].id(), "111111111");
    }

    #[test]
    fn select_entry_ignores_stale_ids() {
        let ctx = scripted(vec![111_111_111, 222_222_222]);
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        session.generate(None).unwrap();
        session.generate(None).unwrap();

        assert!(session.select_entry("111111111"));
        assert_eq!(session.current().map(|e| e.id.as_str()), Some("111111111"));

        assert!(!session.select_entry("999999999"));
        assert_eq!(session.current().map(|e| e.id.as_str()), Some("111111111"));
    }

    #[test]
    fn enqueue_without_selection_is_no_entry() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);

        assert_eq!(session.enqueue_current(), Err(SessionError::NoEntry));
        assert_eq!(session.enqueue_id("123456789"), Err(SessionError::NoEntry));
        assert!(session.queue().is_empty());
    }

    #[test]
    fn same_entry_twice_gets_distinct_print_ids() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        session.generate(Some("dup")).unwrap();

        let a = session.enqueue_current().unwrap();
        let b = session.enqueue_current().unwrap();

        assert_ne!(a.print_id, b.print_id);
        assert_eq!(a.id(), b.id());
        assert_eq!(a.entry.label, b.entry.label);
        assert_eq!(session.queue(), &[a, b]);
    }

    #[test]
    fn twenty_first_enqueue_is_queue_full() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        session.generate(None).unwrap();
        for _ in 0..SHEET_CAPACITY {
            session.enqueue_current().unwrap();
        }

        let err = session.enqueue_current().unwrap_err();

        assert_eq!(err, SessionError::QueueFull { capacity: 20 });
        assert_eq!(session.queue().len(), 20);
        assert_eq!(session.remaining_slots(), 0);
    }

    #[test]
    fn full_queue_reports_full_before_missing_entry() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        session.generate(None).unwrap();
        for _ in 0..SHEET_CAPACITY {
            session.enqueue_current().unwrap();
        }

        assert_eq!(session.enqueue(None), Err(SessionError::QueueFull { capacity: 20 }));
    }

    #[test]
    fn dequeue_then_enqueue_refills_the_sheet() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        session.generate(None).unwrap();
        for _ in 0..SHEET_CAPACITY {
            session.enqueue_current().unwrap();
        }
        let victim = session.queue()[7].print_id.clone();

        assert!(session.dequeue(&victim));
        assert_eq!(session.queue().len(), 19);
        session.enqueue_current().unwrap();

        assert_eq!(session.queue().len(), 20);
        assert!(session.queue().iter().all(|item| item.print_id != victim));
    }

    #[test]
    fn dequeue_unknown_print_id_is_noop() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        session.generate(None).unwrap();
        session.enqueue_current().unwrap();

        assert!(!session.dequeue("missing"));
        assert_eq!(session.queue().len(), 1);
    }

    #[test]
    fn dequeue_removes_only_that_placement() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        session.generate(None).unwrap();
        let a = session.enqueue_current().unwrap();
        let b = session.enqueue_current().unwrap();

        session.dequeue(&a.print_id);

        assert_eq!(session.queue(), &[b.clone()]);
        assert_eq!(BarcodeStore::new(&ctx).get_queue(), vec![b]);
    }

    #[test]
    fn clear_queue_empties_sheet() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        session.generate(None).unwrap();
        session.enqueue_current().unwrap();
        session.enqueue_current().unwrap();

        session.clear_queue();

        assert!(session.queue().is_empty());
        assert!(BarcodeStore::new(&ctx).get_queue().is_empty());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn deleting_current_selects_next_first() {
        let ctx = scripted(vec![222_222_222, 111_111_111]);
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        session.generate(Some("B")).unwrap();
        session.generate(Some("A")).unwrap();
        assert_eq!(session.current().map(|e| e.id.as_str()), Some("111111111"));

        session.delete_entry("111111111");

        let ids: Vec<&str> = session.history().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["222222222"]);
        assert_eq!(session.current().map(|e| e.id.as_str()), Some("222222222"));
    }

    #[test]
    fn deleting_last_entry_clears_selection() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        let only = session.generate(None).unwrap();

        session.delete_entry(&only.id);

        assert!(session.history().is_empty());
        assert!(session.current().is_none());
    }

    #[test]
    fn deleting_other_entry_keeps_selection() {
        let ctx = scripted(vec![111_111_111, 222_222_222]);
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        session.generate(None).unwrap();
        session.generate(None).unwrap();
        session.select_entry("111111111");

        session.delete_entry("222222222");

        assert_eq!(session.current().map(|e| e.id.as_str()), Some("111111111"));
    }

    #[test]
    fn delete_cascades_to_every_placement() {
        let ctx = scripted(vec![111_111_111, 222_222_222]);
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        session.generate(None).unwrap();
        session.generate(None).unwrap();
        for id in ["111111111", "222222222", "111111111", "111111111", "222222222"] {
            session.enqueue_id(id).unwrap();
        }

        session.delete_entry("111111111");

        assert_eq!(session.queue().len(), 2);
        assert!(session.queue().iter().all(|item| item.id() == "222222222"));
        let store = BarcodeStore::new(&ctx);
        assert!(store.get_history().iter().all(|e| e.id != "111111111"));
        assert!(store.get_queue().iter().all(|item| item.id() != "111111111"));
    }

    #[test]
    fn delete_unknown_id_changes_nothing_visible() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        let entry = session.generate(None).unwrap();
        session.enqueue_current().unwrap();

        session.delete_entry("000000000");

        assert_eq!(session.history(), &[entry.clone()]);
        assert_eq!(session.current(), Some(&entry));
        assert_eq!(session.queue().len(), 1);
    }

    #[test]
    fn clear_history_drops_selection_and_sheet() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        session.generate(None).unwrap();
        session.enqueue_current().unwrap();

        session.clear_history();

        assert!(session.history().is_empty());
        assert!(session.current().is_none());
        assert!(session.queue().is_empty());
        let store = BarcodeStore::new(&ctx);
        assert!(store.get_history().is_empty());
        assert!(store.get_queue().is_empty());
    }

    #[test]
    fn sheet_slots_pad_with_placeholders() {
        let ctx = ServiceContext::in_memory();
        let mut session = Session::open(&ctx, DEFAULT_RETRY_BUDGET);
        session.generate(None).unwrap();
        session.enqueue_current().unwrap();
        session.enqueue_current().unwrap();

        let slots = session.sheet_slots();

        assert_eq!(slots.len(), SHEET_CAPACITY);
        assert!(slots[0].is_some() && slots[1].is_some());
        assert!(slots[2..].iter().all(Option::is_none));
        assert_eq!(session.remaining_slots(), 18);
    }
}
