//! Post Context - Value Objects

/// 默认每页条数
pub const DEFAULT_LIMIT: u32 = 10;

/// 帖子的可变字段
///
/// 创建和更新都只接受这两个字段，id 和时间戳由存储分配
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// 分页窗口 (skip, limit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u32,
    pub limit: u32,
}

impl Pagination {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    /// 由可选参数构造，缺省时 skip=0, limit=10
    pub fn from_optional(skip: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            skip: skip.unwrap_or(0),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, DEFAULT_LIMIT)
    }
}

/// LIKE 模式的转义字符
pub(crate) const LIKE_ESCAPE: char = '\\';

/// 子串搜索词
///
/// 查询串按字面匹配，`%` `_` 不作为通配符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(term: impl Into<String>) -> Self {
        Self(term.into())
    }

    /// 转换为 `%term%` 形式的 LIKE 模式，配合 `ESCAPE '\'` 使用
    pub fn to_like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | LIKE_ESCAPE) {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let pagination = Pagination::from_optional(None, None);
        assert_eq!(pagination, Pagination::new(0, 10));
        assert_eq!(pagination, Pagination::default());

        let pagination = Pagination::from_optional(Some(20), None);
        assert_eq!(pagination.skip, 20);
        assert_eq!(pagination.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_like_pattern_plain() {
        assert_eq!(SearchTerm::new("hello").to_like_pattern(), "%hello%");
        assert_eq!(SearchTerm::new("").to_like_pattern(), "%%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(SearchTerm::new("50%").to_like_pattern(), "%50\\%%");
        assert_eq!(SearchTerm::new("a_b").to_like_pattern(), "%a\\_b%");
        assert_eq!(SearchTerm::new("c:\\tmp").to_like_pattern(), "%c:\\\\tmp%");
    }
}
