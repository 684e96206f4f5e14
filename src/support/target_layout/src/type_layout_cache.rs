use crate::{
    LayoutError, LayoutErrorKind, RecordLayoutBuilder, StdSizes, TargetLayout, TypeLayout,
};
use data_units::ByteUnits;
use manifest::{RecordDefinition, RecordDefinitions, TypeExpr};
use once_map::unsync::OnceMap;
use record::{Field, RecordOracle};
use std::{cell::RefCell, collections::HashSet};

/// Most records that may be laid out inside one another by value.
pub const MAX_RECORD_NESTING: usize = 128;

/// Computes type layouts for one target, remembering the layout of every
/// named record once it has been computed.
#[derive(Debug)]
pub struct TypeLayoutCache<'a> {
    memo: OnceMap<String, Result<TypeLayout, LayoutError>>,
    in_progress: RefCell<HashSet<String>>,
    pub sizes: &'a StdSizes,
    pub records: &'a RecordDefinitions,
}

impl<'a> TypeLayoutCache<'a> {
    pub fn new(sizes: &'a StdSizes, records: &'a RecordDefinitions) -> Self {
        Self {
            memo: OnceMap::new(),
            in_progress: Default::default(),
            sizes,
            records,
        }
    }

    pub fn get(&self, ty: &TypeExpr) -> Result<TypeLayout, LayoutError> {
        // Arrays are unwrapped in a loop, innermost length last
        let mut lengths = vec![];
        let mut element = ty;

        let mut layout = loop {
            match element {
                TypeExpr::FixedArray(length, inner) => {
                    lengths.push(*length);
                    element = inner.as_ref();
                }
                TypeExpr::Primitive(primitive) => break self.sizes.primitive_layout(*primitive),
                TypeExpr::Pointer(_) | TypeExpr::FunctionPointer => {
                    break self.sizes.pointer_layout();
                }
                TypeExpr::Slice(_) => break self.sizes.words(3),
                TypeExpr::Named(name) => break self.get_named(name)?,
            }
        };

        for length in lengths.into_iter().rev() {
            layout = array_layout(layout, length)
                .ok_or_else(|| LayoutErrorKind::TooLarge(ty.to_string()))?;
        }

        Ok(layout)
    }

    pub fn get_named(&self, name: &String) -> Result<TypeLayout, LayoutError> {
        if self.in_progress.borrow().contains(name) {
            return Err(LayoutErrorKind::RecursiveRecord(name.clone()).into());
        }

        self.memo.map_insert_ref(
            name,
            |name| name.clone(),
            |name| self.get_named_impl(name),
            |_name, layout| layout.clone(),
        )
    }

    fn get_named_impl(&self, name: &String) -> Result<TypeLayout, LayoutError> {
        let definition = self
            .records
            .get(name)
            .ok_or_else(|| LayoutErrorKind::UndeclaredRecord(name.clone()))?;

        if self.in_progress.borrow().len() >= MAX_RECORD_NESTING {
            return Err(LayoutErrorKind::NestedTooDeep(name.clone()).into());
        }

        self.in_progress.borrow_mut().insert(name.clone());
        let layout = self.record_layout(definition);
        self.in_progress.borrow_mut().remove(name);

        layout
    }

    /// Layout of a record with its fields in declaration order.
    pub fn record_layout(&self, definition: &RecordDefinition) -> Result<TypeLayout, LayoutError> {
        let fields = definition
            .fields
            .iter()
            .map(|field| self.get(&field.ty).map_err(|err| err.in_field(&field.name)))
            .collect::<Result<Vec<_>, _>>()?;

        RecordLayoutBuilder::generate(fields, self.sizes.max_alignment)
            .ok_or_else(|| LayoutErrorKind::TooLarge(definition.name.clone()).into())
    }

    fn layout_of(&self, definition: &RecordDefinition) -> Result<TypeLayout, LayoutError> {
        if self.records.contains_key(&definition.name) {
            self.get_named(&definition.name)
        } else {
            self.record_layout(definition)
        }
    }
}

/// Every element but the last one is followed by its own padding.
fn array_layout(element: TypeLayout, length: u64) -> Option<TypeLayout> {
    let Some(rest) = length.checked_sub(1) else {
        return Some(TypeLayout::new(ByteUnits::ZERO, element.alignment));
    };

    let width = element
        .width
        .checked_align_to(element.alignment)?
        .checked_mul(rest)?
        .checked_add(element.width)?;

    Some(TypeLayout::new(width, element.alignment))
}

impl<'a> RecordOracle<RecordDefinition> for TypeLayoutCache<'a> {
    type Error = LayoutError;

    fn fields_of(&self, record: &RecordDefinition) -> Result<Vec<Field>, LayoutError> {
        record
            .fields
            .iter()
            .map(|field| {
                let layout = self
                    .get(&field.ty)
                    .map_err(|err| err.in_field(&field.name))?;

                Ok(Field::new(field.name.clone(), layout.width, layout.alignment))
            })
            .collect()
    }

    fn actual_size_of(&self, record: &RecordDefinition) -> Result<ByteUnits, LayoutError> {
        self.layout_of(record).map(|layout| layout.width)
    }

    fn alignment_of(&self, record: &RecordDefinition) -> Result<ByteUnits, LayoutError> {
        self.layout_of(record).map(|layout| layout.alignment)
    }
}
