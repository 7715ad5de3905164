use quantduo_core::model::{Lesson, LessonCompletion, LessonId, Module, ModuleId};

use crate::error::ProgressError;

//
// ─── PROGRESS SERVICE ──────────────────────────────────────────────────────────
//

/// The lesson-progression store: owns the module list and the running set of
/// completed lesson ids.
///
/// Constructed once from the seed catalog and passed by reference to
/// consumers; there is no process-wide singleton. All mutation goes through
/// [`ProgressService::mark_lesson_completed`], which keeps three facts in
/// sync per module: lesson `completed` flags, lesson `locked` flags (a
/// completion unlocks exactly the next lesson in sequence), and the derived
/// `progress` fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressService {
    modules: Vec<Module>,
    completed: Vec<LessonId>,
}

impl ProgressService {
    /// Builds the store from seeded modules, deriving the initial
    /// completed-lesson list from lessons already flagged completed.
    #[must_use]
    pub fn new(modules: Vec<Module>) -> Self {
        let completed = modules
            .iter()
            .flat_map(Module::lessons)
            .filter(|lesson| lesson.is_completed())
            .map(|lesson| lesson.id().clone())
            .collect();

        Self { modules, completed }
    }

    /// All modules, in catalog order.
    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Completed lesson ids in completion order (seed order first, then the
    /// order in which lessons were marked at runtime).
    #[must_use]
    pub fn completed_lessons(&self) -> &[LessonId] {
        &self.completed
    }

    /// Linear lookup of a module by id.
    #[must_use]
    pub fn module(&self, id: &ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id() == id)
    }

    /// Finds a lesson anywhere in the catalog along with its owning module.
    #[must_use]
    pub fn find_lesson(&self, id: &LessonId) -> Option<(&Module, &Lesson)> {
        self.modules
            .iter()
            .find_map(|module| module.lesson(id).map(|lesson| (module, lesson)))
    }

    /// The first unlocked, not-yet-completed lesson in catalog order — what
    /// the home screen offers as "next lesson".
    #[must_use]
    pub fn next_lesson(&self) -> Option<(&Module, &Lesson)> {
        self.modules.iter().find_map(|module| {
            module
                .lessons()
                .iter()
                .find(|lesson| !lesson.is_completed() && !lesson.is_locked())
                .map(|lesson| (module, lesson))
        })
    }

    /// Fraction of all lessons completed across every module.
    #[must_use]
    pub fn overall_progress(&self) -> f32 {
        let total: usize = self.modules.iter().map(Module::total_lessons).sum();
        if total == 0 {
            return 0.0;
        }
        let completed: usize = self.modules.iter().map(Module::completed_lessons).sum();
        completed as f32 / total as f32
    }

    /// Marks the lesson with `id` completed.
    ///
    /// Effects, confined to the owning module: the lesson's `completed` flag
    /// is set, the immediately following lesson is unlocked if it was locked
    /// and incomplete, and the module's `progress` is recomputed. The id is
    /// recorded in the completed list idempotently, so re-marking a finished
    /// lesson is a no-op that still reports the (unchanged) outcome.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::LessonNotFound` when no module contains the
    /// lesson; every module is left byte-for-byte unchanged in that case.
    pub fn mark_lesson_completed(
        &mut self,
        id: &LessonId,
    ) -> Result<LessonCompletion, ProgressError> {
        for module in &mut self.modules {
            if let Some(outcome) = module.mark_lesson_completed(id) {
                if !self.completed.contains(id) {
                    self.completed.push(id.clone());
                }
                return Ok(outcome);
            }
        }

        Err(ProgressError::LessonNotFound(id.clone()))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &str, completed: bool, locked: bool) -> Lesson {
        Lesson::new(LessonId::new(id), format!("Lesson {id}"), "5 min", completed, locked).unwrap()
    }

    fn store() -> ProgressService {
        let quant_basics = Module::new(
            ModuleId::new("quant-basics"),
            "Quant Basics",
            "Learn the fundamental concepts of quantitative trading",
            "function",
            "#4C9AFF",
            vec![
                lesson("qb-1", true, false),
                lesson("qb-2", true, false),
                lesson("qb-3", true, false),
                lesson("qb-4", false, false),
                lesson("qb-5", false, true),
            ],
        )
        .unwrap();
        let risk = Module::new(
            ModuleId::new("risk-management"),
            "Risk Management",
            "Learn to manage risk in your trading strategies",
            "shield.fill",
            "#FF3D00",
            vec![
                lesson("rm-1", false, true),
                lesson("rm-2", false, true),
            ],
        )
        .unwrap();

        ProgressService::new(vec![quant_basics, risk])
    }

    #[test]
    fn seed_derives_completed_list() {
        let store = store();
        assert_eq!(
            store.completed_lessons(),
            [
                LessonId::new("qb-1"),
                LessonId::new("qb-2"),
                LessonId::new("qb-3"),
            ]
        );
    }

    #[test]
    fn module_lookup_by_id() {
        let store = store();
        let module = store.module(&ModuleId::new("quant-basics")).unwrap();
        assert_eq!(module.title(), "Quant Basics");
        assert!(store.module(&ModuleId::new("alpha-signals")).is_none());
    }

    #[test]
    fn marking_qb_4_unlocks_qb_5_and_bumps_progress() {
        let mut store = store();
        let before = store.module(&ModuleId::new("quant-basics")).unwrap().progress();
        assert!((before - 0.6).abs() < f32::EPSILON);

        let outcome = store.mark_lesson_completed(&LessonId::new("qb-4")).unwrap();
        assert_eq!(outcome.module_id, ModuleId::new("quant-basics"));
        assert_eq!(outcome.unlocked, Some(LessonId::new("qb-5")));
        assert!((outcome.progress - 0.8).abs() < f32::EPSILON);

        let module = store.module(&ModuleId::new("quant-basics")).unwrap();
        assert!(module.lesson(&LessonId::new("qb-4")).unwrap().is_completed());
        assert!(!module.lesson(&LessonId::new("qb-5")).unwrap().is_locked());
        assert!((module.progress() - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn marking_is_idempotent() {
        let mut store = store();
        store.mark_lesson_completed(&LessonId::new("qb-4")).unwrap();
        let once = store.clone();

        let outcome = store.mark_lesson_completed(&LessonId::new("qb-4")).unwrap();
        assert!(!outcome.newly_completed);
        assert_eq!(store, once);
    }

    #[test]
    fn marking_leaves_other_modules_untouched() {
        let mut store = store();
        let risk_before = store.module(&ModuleId::new("risk-management")).unwrap().clone();

        store.mark_lesson_completed(&LessonId::new("qb-4")).unwrap();

        let risk_after = store.module(&ModuleId::new("risk-management")).unwrap();
        assert_eq!(*risk_after, risk_before);
    }

    #[test]
    fn unknown_lesson_reports_miss_and_changes_nothing() {
        let mut store = store();
        let before = store.clone();

        let err = store.mark_lesson_completed(&LessonId::new("zz-9")).unwrap_err();
        assert_eq!(err, ProgressError::LessonNotFound(LessonId::new("zz-9")));
        assert_eq!(store, before);
    }

    #[test]
    fn progress_is_monotone_and_exact() {
        let mut store = store();
        let module_id = ModuleId::new("quant-basics");
        let mut last = store.module(&module_id).unwrap().progress();

        for id in ["qb-4", "qb-5"] {
            store.mark_lesson_completed(&LessonId::new(id)).unwrap();
            let module = store.module(&module_id).unwrap();
            let expected = module.completed_lessons() as f32 / module.total_lessons() as f32;
            assert!((module.progress() - expected).abs() < f32::EPSILON);
            assert!(module.progress() >= last);
            last = module.progress();
        }
        assert!((last - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn next_lesson_is_first_unlocked_incomplete() {
        let mut store = store();
        let (module, lesson) = store.next_lesson().unwrap();
        assert_eq!(module.id(), &ModuleId::new("quant-basics"));
        assert_eq!(lesson.id(), &LessonId::new("qb-4"));

        store.mark_lesson_completed(&LessonId::new("qb-4")).unwrap();
        let (_, lesson) = store.next_lesson().unwrap();
        assert_eq!(lesson.id(), &LessonId::new("qb-5"));
    }

    #[test]
    fn overall_progress_spans_modules() {
        let store = store();
        // 3 of 7 lessons completed across both modules.
        assert!((store.overall_progress() - 3.0 / 7.0).abs() < f32::EPSILON);
    }

    #[test]
    fn find_lesson_returns_owning_module() {
        let store = store();
        let (module, lesson) = store.find_lesson(&LessonId::new("rm-2")).unwrap();
        assert_eq!(module.id(), &ModuleId::new("risk-management"));
        assert!(lesson.is_locked());
        assert!(store.find_lesson(&LessonId::new("zz-1")).is_none());
    }
}
