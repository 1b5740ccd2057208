//! Known formatting mistakes in the PRD and their corrections

use super::substitution::Substitution;

/// Fixes for `PRD.md`, applied top to bottom
pub const PRD_FIXES: &[Substitution<'static>] = &[
    // Duplicated section heading
    Substitution::new(
        "#### 2.4 敌人系统\n\n#### 2.4 敌人系统\n",
        "#### 2.4 敌人系统\n",
    ),
    // Enemy table: one leading `|` too many on each row
    Substitution::new("||**4种怪物类型**：", "|**4种怪物类型**："),
    Substitution::new("||| 怪物类型 |", "|| 怪物类型 |"),
    Substitution::new("|||---------|", "||---------|"),
    Substitution::new("||| 哥布林 |", "|| 哥布林 |"),
    Substitution::new("||| 蝙蝠 |", "|| 蝙蝠 |"),
    Substitution::new("||| 骷髅 |", "|| 骷髅 |"),
    Substitution::new("||| 妖怪4 |", "|| 妖怪4 |"),
];
