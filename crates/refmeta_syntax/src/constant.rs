//! Constant rendering for attribute arguments.
//!
//! Close to the constant form used inside declarations, with two
//! differences: enum values are emitted as a compact expression with no
//! interior spaces (`Color.Red|Color.Blue`), and array element types are
//! rendered through the standalone type-name format.

use refmeta_model::{DisplayPart, PartKind, SymbolId, TypedConstant};

use crate::buffer::PartBuffer;
use crate::dialect::Dialect;
use crate::engine;
use crate::error::Result;
use crate::options::DisplayOptions;
use crate::view::SymbolView;

/// Append the rendering of one attribute-argument constant into `buf`.
pub(crate) fn write_typed_constant(
    view: &SymbolView<'_>,
    constant: &TypedConstant,
    dialect: Dialect,
    buf: &mut PartBuffer,
) -> Result<()> {
    let profile = dialect.profile();
    match constant {
        TypedConstant::Primitive(value) => {
            buf.push(DisplayPart::new(
                engine::primitive_kind(value),
                engine::primitive_text(value, dialect),
            ));
            Ok(())
        }
        TypedConstant::Enum { enum_type, value } => {
            write_enum_expression(view, *enum_type, *value, dialect, buf)
        }
        TypedConstant::Type(t) => {
            buf.keyword(profile.type_of);
            buf.punctuation("(");
            engine::write_type_ref(view, t, dialect, DisplayOptions::type_name(), buf)?;
            buf.punctuation(")");
            Ok(())
        }
        TypedConstant::Array { ty, values } => {
            buf.keyword(profile.new_keyword);
            buf.space();
            engine::write_type_ref(view, ty, dialect, DisplayOptions::type_name(), buf)?;
            buf.space();
            buf.punctuation("{");
            buf.space();
            if !values.is_empty() {
                for value in values {
                    write_typed_constant(view, value, dialect, buf)?;
                    buf.punctuation(",");
                    buf.space();
                }
                buf.remove_end();
                buf.remove_end();
                buf.space();
            }
            buf.punctuation("}");
            Ok(())
        }
        TypedConstant::Null => {
            buf.keyword(profile.null_literal);
            Ok(())
        }
    }
}

/// The enum expression with interior spaces stripped, the way it appears
/// between attribute brackets.
fn write_enum_expression(
    view: &SymbolView<'_>,
    enum_type: SymbolId,
    value: i64,
    dialect: Dialect,
    buf: &mut PartBuffer,
) -> Result<()> {
    let mut expr = PartBuffer::new();
    engine::write_enum_constant(
        view,
        enum_type,
        value,
        dialect,
        DisplayOptions::enum_constant(),
        &mut expr,
    )?;
    for part in expr.finish() {
        if part.kind != PartKind::Space {
            buf.push(part);
        }
    }
    Ok(())
}
