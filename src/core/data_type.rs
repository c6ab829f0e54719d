//! Opaque type descriptors used to tag values.
//!
//! The type subsystem of the debugger owns real type information; this module
//! carries only what is needed to size a value, derive a pointer to it, and
//! render scalar values. Aggregate layouts are never interpreted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Builtin scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicType {
    Invalid,
    Void,
    Bool,
    Char,
    SignedChar,
    UnsignedChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    Double,
}

impl BasicType {
    /// C spelling of the type.
    pub fn name(&self) -> &'static str {
        match self {
            BasicType::Invalid => "<invalid>",
            BasicType::Void => "void",
            BasicType::Bool => "bool",
            BasicType::Char => "char",
            BasicType::SignedChar => "signed char",
            BasicType::UnsignedChar => "unsigned char",
            BasicType::Short => "short",
            BasicType::UnsignedShort => "unsigned short",
            BasicType::Int => "int",
            BasicType::UnsignedInt => "unsigned int",
            BasicType::Long => "long",
            BasicType::UnsignedLong => "unsigned long",
            BasicType::LongLong => "long long",
            BasicType::UnsignedLongLong => "unsigned long long",
            BasicType::Float => "float",
            BasicType::Double => "double",
        }
    }

    /// Size in bytes on a target with the given pointer width.
    ///
    /// `long` follows the pointer width (LP64 / ILP32). `void` and the
    /// invalid type have no size.
    pub fn byte_size(&self, address_byte_size: u32) -> Option<u64> {
        match self {
            BasicType::Invalid | BasicType::Void => None,
            BasicType::Bool | BasicType::Char | BasicType::SignedChar | BasicType::UnsignedChar => {
                Some(1)
            }
            BasicType::Short | BasicType::UnsignedShort => Some(2),
            BasicType::Int | BasicType::UnsignedInt | BasicType::Float => Some(4),
            BasicType::Long | BasicType::UnsignedLong => {
                Some(if address_byte_size >= 8 { 8 } else { 4 })
            }
            BasicType::LongLong | BasicType::UnsignedLongLong | BasicType::Double => Some(8),
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            BasicType::Char
                | BasicType::SignedChar
                | BasicType::Short
                | BasicType::Int
                | BasicType::Long
                | BasicType::LongLong
        )
    }
}

/// Discriminant of a [`DataType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataTypeKind {
    Invalid,
    Basic,
    Pointer,
    Opaque,
}

/// Kind-specific payload of a [`DataType`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeData {
    /// No usable type
    Invalid,
    /// Builtin scalar
    Basic { basic: BasicType },
    /// Pointer to another type
    Pointer { pointee: Box<DataType> },
    /// Named type whose layout is owned elsewhere (structs, unions, arrays)
    Opaque { size: u64 },
}

/// A type descriptor as handed over by the type subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataType {
    /// Human-readable name of the type
    pub name: String,
    /// Type-specific data
    pub type_data: TypeData,
}

impl DataType {
    /// The invalid type. Every derivation from it stays invalid.
    pub fn invalid() -> Self {
        Self {
            name: BasicType::Invalid.name().to_string(),
            type_data: TypeData::Invalid,
        }
    }

    /// A builtin scalar type. `BasicType::Invalid` yields [`DataType::invalid`].
    pub fn basic(basic: BasicType) -> Self {
        if basic == BasicType::Invalid {
            return Self::invalid();
        }
        Self {
            name: basic.name().to_string(),
            type_data: TypeData::Basic { basic },
        }
    }

    /// A named type of known size whose layout is not interpreted here.
    pub fn opaque(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            type_data: TypeData::Opaque { size },
        }
    }

    pub fn kind(&self) -> DataTypeKind {
        match self.type_data {
            TypeData::Invalid => DataTypeKind::Invalid,
            TypeData::Basic { .. } => DataTypeKind::Basic,
            TypeData::Pointer { .. } => DataTypeKind::Pointer,
            TypeData::Opaque { .. } => DataTypeKind::Opaque,
        }
    }

    /// Derive `T *` from `T`.
    ///
    /// Deriving from an invalid type returns the invalid type instead of a
    /// pointer with a dangling base.
    pub fn pointer_type(&self) -> DataType {
        if !self.is_valid() {
            return Self::invalid();
        }
        Self {
            name: format!("{} *", self.name),
            type_data: TypeData::Pointer {
                pointee: Box::new(self.clone()),
            },
        }
    }

    /// Target of a pointer type.
    pub fn pointee_type(&self) -> Option<&DataType> {
        match &self.type_data {
            TypeData::Pointer { pointee } => Some(pointee),
            _ => None,
        }
    }

    /// The scalar kind, for basic types.
    pub fn basic_type(&self) -> Option<BasicType> {
        match self.type_data {
            TypeData::Basic { basic } => Some(basic),
            _ => None,
        }
    }

    /// Validate the descriptor, including every type it was derived from.
    pub fn is_valid(&self) -> bool {
        match &self.type_data {
            TypeData::Invalid => false,
            TypeData::Basic { basic } => *basic != BasicType::Invalid,
            TypeData::Pointer { pointee } => pointee.is_valid(),
            TypeData::Opaque { .. } => !self.name.trim().is_empty(),
        }
    }

    /// Size of one value of this type in bytes, if it has one.
    pub fn byte_size(&self, address_byte_size: u32) -> Option<u64> {
        if !self.is_valid() {
            return None;
        }
        match &self.type_data {
            TypeData::Invalid => None,
            TypeData::Basic { basic } => basic.byte_size(address_byte_size),
            TypeData::Pointer { .. } => Some(u64::from(address_byte_size)),
            TypeData::Opaque { size } => Some(*size),
        }
    }

    pub fn is_pointer(&self) -> bool {
        self.kind() == DataTypeKind::Pointer
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_type_sizes() {
        let int = DataType::basic(BasicType::Int);
        assert_eq!(int.byte_size(8), Some(4));
        assert_eq!(DataType::basic(BasicType::Long).byte_size(8), Some(8));
        assert_eq!(DataType::basic(BasicType::Long).byte_size(4), Some(4));
        assert_eq!(DataType::basic(BasicType::Void).byte_size(8), None);
    }

    #[test]
    fn test_pointer_derivation() {
        let ptr = DataType::basic(BasicType::Int).pointer_type();
        assert!(ptr.is_valid());
        assert!(ptr.is_pointer());
        assert_eq!(ptr.name, "int *");
        assert_eq!(ptr.byte_size(4), Some(4));
        assert_eq!(ptr.pointee_type().unwrap().basic_type(), Some(BasicType::Int));
    }

    #[test]
    fn test_pointer_to_invalid_base_is_invalid() {
        let invalid = DataType::basic(BasicType::Invalid);
        assert_eq!(invalid.kind(), DataTypeKind::Invalid);

        let ptr = invalid.pointer_type();
        assert!(!ptr.is_valid());
        assert_eq!(ptr.byte_size(8), None);
        assert!(ptr.pointer_type().pointee_type().is_none());
    }

    #[test]
    fn test_hand_built_pointer_to_invalid() {
        let ptr = DataType {
            name: "bogus *".to_string(),
            type_data: TypeData::Pointer {
                pointee: Box::new(DataType::invalid()),
            },
        };
        assert!(!ptr.is_valid());
        assert_eq!(ptr.byte_size(8), None);
    }

    #[test]
    fn test_opaque_type() {
        let foo = DataType::opaque("foo", 12);
        assert!(foo.is_valid());
        assert_eq!(foo.byte_size(8), Some(12));
        assert!(!DataType::opaque("  ", 4).is_valid());
    }

    #[test]
    fn test_serialization() {
        let ty = DataType::opaque("foo", 12).pointer_type();
        let json = serde_json::to_string(&ty).unwrap();
        let back: DataType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ty);
    }
}
