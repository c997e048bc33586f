//! Matcher instruction kinds.
//!
//! Ordinals are shared with the table generator and must not be reordered.

/// Semantics of one matcher table instruction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum MatcherKind {
    Scope = 0,
    RecordNode,
    RecordChild,
    RecordMemRef,
    CaptureGlueInput,
    MoveChild,
    MoveParent,
    CheckSame,
    CheckChildSame,
    CheckPatternPredicate,
    CheckPredicate,
    CheckOpcode,
    SwitchOpcode,
    CheckType,
    SwitchType,
    CheckChildType,
    CheckInteger,
    CheckChildInteger,
    CheckCondCode,
    CheckChild2CondCode,
    CheckValueType,
    CheckComplexPat,
    CheckAndImm,
    CheckOrImm,
    CheckImmAllOnesV,
    CheckImmAllZerosV,
    CheckFoldableChainNode,
    EmitInteger,
    EmitStringInteger,
    EmitRegister,
    EmitConvertToTarget,
    EmitMergeInputChains,
    EmitCopyToReg,
    EmitNode,
    EmitNodeXForm,
    CompleteMatch,
    MorphNodeTo,
    Group,
}

impl MatcherKind {
    /// Every kind, indexed by ordinal.
    pub const ALL: [MatcherKind; 38] = [
        Self::Scope,
        Self::RecordNode,
        Self::RecordChild,
        Self::RecordMemRef,
        Self::CaptureGlueInput,
        Self::MoveChild,
        Self::MoveParent,
        Self::CheckSame,
        Self::CheckChildSame,
        Self::CheckPatternPredicate,
        Self::CheckPredicate,
        Self::CheckOpcode,
        Self::SwitchOpcode,
        Self::CheckType,
        Self::SwitchType,
        Self::CheckChildType,
        Self::CheckInteger,
        Self::CheckChildInteger,
        Self::CheckCondCode,
        Self::CheckChild2CondCode,
        Self::CheckValueType,
        Self::CheckComplexPat,
        Self::CheckAndImm,
        Self::CheckOrImm,
        Self::CheckImmAllOnesV,
        Self::CheckImmAllZerosV,
        Self::CheckFoldableChainNode,
        Self::EmitInteger,
        Self::EmitStringInteger,
        Self::EmitRegister,
        Self::EmitConvertToTarget,
        Self::EmitMergeInputChains,
        Self::EmitCopyToReg,
        Self::EmitNode,
        Self::EmitNodeXForm,
        Self::CompleteMatch,
        Self::MorphNodeTo,
        Self::Group,
    ];

    /// Decode from the integer written by the table generator.
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Structural kinds introduce nested sub-ranges (scope bodies, switch
    /// arms); everything else is an atomic check or emit step.
    pub fn is_leaf(self) -> bool {
        !matches!(
            self,
            Self::Scope | Self::SwitchOpcode | Self::SwitchType | Self::Group
        )
    }

    /// Terminal kinds conclude a match and name the pattern that produced it.
    pub fn has_pattern(self) -> bool {
        matches!(self, Self::CompleteMatch | Self::MorphNodeTo)
    }

    pub fn has_pattern_predicate(self) -> bool {
        self == Self::CheckPatternPredicate
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scope => "Scope",
            Self::RecordNode => "RecordNode",
            Self::RecordChild => "RecordChild",
            Self::RecordMemRef => "RecordMemRef",
            Self::CaptureGlueInput => "CaptureGlueInput",
            Self::MoveChild => "MoveChild",
            Self::MoveParent => "MoveParent",
            Self::CheckSame => "CheckSame",
            Self::CheckChildSame => "CheckChildSame",
            Self::CheckPatternPredicate => "CheckPatternPredicate",
            Self::CheckPredicate => "CheckPredicate",
            Self::CheckOpcode => "CheckOpcode",
            Self::SwitchOpcode => "SwitchOpcode",
            Self::CheckType => "CheckType",
            Self::SwitchType => "SwitchType",
            Self::CheckChildType => "CheckChildType",
            Self::CheckInteger => "CheckInteger",
            Self::CheckChildInteger => "CheckChildInteger",
            Self::CheckCondCode => "CheckCondCode",
            Self::CheckChild2CondCode => "CheckChild2CondCode",
            Self::CheckValueType => "CheckValueType",
            Self::CheckComplexPat => "CheckComplexPat",
            Self::CheckAndImm => "CheckAndImm",
            Self::CheckOrImm => "CheckOrImm",
            Self::CheckImmAllOnesV => "CheckImmAllOnesV",
            Self::CheckImmAllZerosV => "CheckImmAllZerosV",
            Self::CheckFoldableChainNode => "CheckFoldableChainNode",
            Self::EmitInteger => "EmitInteger",
            Self::EmitStringInteger => "EmitStringInteger",
            Self::EmitRegister => "EmitRegister",
            Self::EmitConvertToTarget => "EmitConvertToTarget",
            Self::EmitMergeInputChains => "EmitMergeInputChains",
            Self::EmitCopyToReg => "EmitCopyToReg",
            Self::EmitNode => "EmitNode",
            Self::EmitNodeXForm => "EmitNodeXForm",
            Self::CompleteMatch => "CompleteMatch",
            Self::MorphNodeTo => "MorphNodeTo",
            Self::Group => "Group",
        }
    }
}

impl std::fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
