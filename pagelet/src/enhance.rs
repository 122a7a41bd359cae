//! The select enhancer behavior.
//!
//! Plain `<select>` controls marked for enhancement are upgraded with a
//! searchable dropdown widget on page load.
//! The widget itself is an external collaborator;
//! this module only walks the matching elements and hands each one over.

/// Element discovery for the select enhancer.
///
/// Implemented over a document (or a subtree of it) by the backend.
pub trait SelectQuery {
    /// The backend element type.
    type Select;

    /// Collect the elements marked for dropdown enhancement, in document order.
    fn enhanceable_selects(&self) -> Vec<Self::Select>;
}

/// The external searchable-dropdown widget.
pub trait DropdownWidget {
    /// The backend element type.
    type Select;

    /// Attach the dropdown behavior to the element.
    ///
    /// Widget failures are not translated and propagate to the host.
    fn enhance(&self, select: &Self::Select);
}

/// Enhance every matching element exactly once.
///
/// Returns the number of enhanced elements.
/// Zero matching elements is a no-op.
pub fn enhance_selects<Q, W>(query: &Q, widget: &W) -> usize
where
    Q: SelectQuery,
    W: DropdownWidget<Select = Q::Select>,
{
    let selects = query.enhanceable_selects();
    for select in &selects {
        widget.enhance(select);
    }
    selects.len()
}
