//! Built-in default document templates and the placeholder tokens the
//! generator replaces.
//!
//! Substitution is a global, context-free literal replace — no template
//! engine — so output stays byte-for-byte reproducible. Any occurrence
//! of a token anywhere in a document is replaced, placeholder position
//! or not.

use crate::types::DocKind;

// ---------------------------------------------------------------------------
// Placeholder tokens
// ---------------------------------------------------------------------------

pub const NAME: &str = "[项目名称]";
pub const CREATED_DATE: &str = "[创建日期]";
pub const DATE: &str = "[日期]";
pub const AUTHOR: &str = "[制定人]";
pub const CREATOR: &str = "[创建人]";
pub const UPDATED_DATE: &str = "[更新日期]";

/// Motivation sentence in the spec template, swapped for the user's
/// `--description` when one is given.
pub const MOTIVATION: &str = "*描述为什么需要这个功能，解决了什么问题*";

/// Value substituted for the author/creator tokens.
pub const AI_ASSISTANT: &str = "AI Assistant";

/// Stand-in printed in command phrases when no feature name is given.
pub const FEATURE_PLACEHOLDER: &str = "[功能名称]";

// ---------------------------------------------------------------------------
// Default templates
// ---------------------------------------------------------------------------

pub fn default_template(kind: DocKind) -> &'static str {
    match kind {
        DocKind::Spec => DEFAULT_SPEC_TEMPLATE,
        DocKind::Plan => DEFAULT_PLAN_TEMPLATE,
        DocKind::Tasks => DEFAULT_TASKS_TEMPLATE,
    }
}

const DEFAULT_SPEC_TEMPLATE: &str = r#"# 功能规范

## 1. 需求概述

### 1.1 背景和动机
*描述为什么需要这个功能，解决了什么问题*

### 1.2 目标用户
*明确功能的主要用户群体*

### 1.3 成功标准
*定义功能成功完成的具体标准*

## 2. 功能需求

### 2.1 核心功能
- **功能1**: [详细描述]
- **功能2**: [详细描述]

### 2.2 用户界面
*界面设计和交互要求*

### 2.3 数据模型
*数据结构要求*

## 3. 非功能需求

### 3.1 性能要求
*响应时间、并发处理等要求*

### 3.2 安全要求
*身份验证、权限控制等要求*

### 3.3 可用性要求
*易用性、可访问性等要求*

## 4. 验收标准

### 4.1 功能验收
- [ ] 所有核心功能正常工作
- [ ] 用户界面符合设计要求

### 4.2 质量验收
- [ ] 代码质量符合标准
- [ ] 测试覆盖率达标

---

*功能名称: [项目名称]*
*创建日期: [创建日期]*
"#;

const DEFAULT_PLAN_TEMPLATE: &str = r#"# 实施计划

## 1. 架构设计

### 1.1 整体架构
*架构模式和技术栈选择*

### 1.2 系统组件
*主要模块和组件划分*

### 1.3 技术决策
*技术选择的原因和考虑*

## 2. 开发阶段

### 阶段1: 基础架构搭建
**时间估算**: [X天/周]
- [ ] 项目初始化
- [ ] 开发环境搭建

### 阶段2: 核心功能开发
**时间估算**: [X天/周]
- [ ] 数据模型设计
- [ ] 业务逻辑实现

### 阶段3: 功能完善
**时间估算**: [X天/周]
- [ ] 高级功能实现
- [ ] 性能优化

### 阶段4: 测试和部署
**时间估算**: [X天/周]
- [ ] 功能测试
- [ ] 生产部署

## 3. 资源分配

### 3.1 人力资源
*团队成员和角色分配*

### 3.2 技术资源
*开发、测试、生产环境*

### 3.3 时间安排
*关键里程碑和时间节点*

## 4. 风险管理

### 4.1 技术风险
| 风险项 | 影响程度 | 缓解措施 |
|--------|----------|----------|

### 4.2 项目风险
| 风险项 | 影响程度 | 缓解措施 |
|--------|----------|----------|

---

*功能名称: [项目名称]*
*制定人: [制定人]*
*更新日期: [日期]*
"#;

const DEFAULT_TASKS_TEMPLATE: &str = r#"# 任务分解

## 📋 任务概览

**功能模块**: [项目名称]
**创建时间**: [创建日期]
**预估总工时**: [总工时估算]

---

## 🎯 详细任务列表

### 🔧 阶段1: 前期准备

#### P-01: 需求分析和技术调研
- **描述**: 详细分析需求，调研相关技术
- **负责人**: [开发人员姓名]
- **预估工时**: [X]小时
- **验收标准**:
  - [ ] 需求理解清晰
  - [ ] 技术选型合理

#### P-02: 环境搭建和工具配置
- **描述**: 搭建开发环境，配置工具
- **负责人**: [开发人员姓名]
- **预估工时**: [X]小时
- **验收标准**:
  - [ ] 开发环境可用
  - [ ] 工具配置正确

---

### 💻 阶段2: 后端开发

#### B-01: 数据模型设计和实现
- **描述**: 设计数据库模型，创建数据访问层
- **负责人**: [后端开发人员]
- **预估工时**: [X]小时
- **验收标准**:
  - [ ] 数据模型符合需求
  - [ ] 接口测试通过

---

### 🎨 阶段3: 前端开发

#### F-01: 组件设计和开发
- **描述**: 设计UI组件，实现组件库
- **负责人**: [前端开发人员]
- **预估工时**: [X]小时
- **验收标准**:
  - [ ] 组件可复用
  - [ ] 响应式适配

---

### 🧪 阶段4: 测试和质量保证

#### T-01: 单元测试完善
- **描述**: 编写单元测试，确保覆盖率
- **负责人**: [开发人员]
- **预估工时**: [X]小时
- **验收标准**:
  - [ ] 测试覆盖率达标
  - [ ] 测试稳定通过

---

## 📊 任务统计

| 阶段 | 任务数 | 总工时 | 完成度 |
|------|--------|--------|--------|
| 前期准备 | 2 | [X]h | 0% |
| 后端开发 | 1 | [X]h | 0% |
| 前端开发 | 1 | [X]h | 0% |
| 测试质量 | 1 | [X]h | 0% |

---

## 📈 进度报告

### 本周进展
- **完成任务**: [完成任务列表]
- **实际工时**: [实际使用工时]

### 下周计划
- **计划任务**: [下周计划任务]
- **预估工时**: [预估工时]

---

*创建人: [创建人]*
*更新日期: [更新日期]*
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_template_carries_its_tokens() {
        let t = default_template(DocKind::Spec);
        assert!(t.contains(NAME));
        assert!(t.contains(CREATED_DATE));
        assert!(t.contains(MOTIVATION));
    }

    #[test]
    fn plan_template_carries_its_tokens() {
        let t = default_template(DocKind::Plan);
        assert!(t.contains(NAME));
        assert!(t.contains(AUTHOR));
        assert!(t.contains(DATE));
    }

    #[test]
    fn tasks_template_carries_its_tokens() {
        let t = default_template(DocKind::Tasks);
        assert!(t.contains(NAME));
        assert!(t.contains(CREATOR));
        assert!(t.contains(CREATED_DATE));
        assert!(t.contains(UPDATED_DATE));
    }
}
