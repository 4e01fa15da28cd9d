//! In-flight request bookkeeping.
//!
//! One flag per request kind, mutated only by the reducer. There is no
//! cancellation and no timeout: overlapping requests of the same kind resolve
//! in arrival order, last writer wins.

/// Kinds of async work the runtime can have in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Restore,
    Login,
    Register,
    ArticleList,
    ArticleFetch,
    CommentList,
    CommentPost,
    CommentDelete,
    Publish,
}

/// Request lifecycle state (stored in AppState, mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct Tasks {
    restore: bool,
    login: bool,
    register: bool,
    article_list: bool,
    article_fetch: bool,
    comment_list: bool,
    comment_post: bool,
    comment_delete: bool,
    publish: bool,
}

impl Tasks {
    fn slot(&mut self, kind: TaskKind) -> &mut bool {
        match kind {
            TaskKind::Restore => &mut self.restore,
            TaskKind::Login => &mut self.login,
            TaskKind::Register => &mut self.register,
            TaskKind::ArticleList => &mut self.article_list,
            TaskKind::ArticleFetch => &mut self.article_fetch,
            TaskKind::CommentList => &mut self.comment_list,
            TaskKind::CommentPost => &mut self.comment_post,
            TaskKind::CommentDelete => &mut self.comment_delete,
            TaskKind::Publish => &mut self.publish,
        }
    }

    pub fn begin(&mut self, kind: TaskKind) {
        *self.slot(kind) = true;
    }

    pub fn finish(&mut self, kind: TaskKind) {
        *self.slot(kind) = false;
    }

    pub fn is_running(&self, kind: TaskKind) -> bool {
        match kind {
            TaskKind::Restore => self.restore,
            TaskKind::Login => self.login,
            TaskKind::Register => self.register,
            TaskKind::ArticleList => self.article_list,
            TaskKind::ArticleFetch => self.article_fetch,
            TaskKind::CommentList => self.comment_list,
            TaskKind::CommentPost => self.comment_post,
            TaskKind::CommentDelete => self.comment_delete,
            TaskKind::Publish => self.publish,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.restore
            || self.login
            || self.register
            || self.article_list
            || self.article_fetch
            || self.comment_list
            || self.comment_post
            || self.comment_delete
            || self.publish
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_finish_roundtrip() {
        let mut tasks = Tasks::default();
        assert!(!tasks.is_any_running());

        tasks.begin(TaskKind::ArticleList);
        assert!(tasks.is_running(TaskKind::ArticleList));
        assert!(!tasks.is_running(TaskKind::Login));
        assert!(tasks.is_any_running());

        tasks.finish(TaskKind::ArticleList);
        assert!(!tasks.is_any_running());
    }
}
