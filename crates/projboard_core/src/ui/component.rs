//! Component capability shared by screen components.
//!
//! Each screen builds its root node, wires its collaborators once it has a
//! stable shared handle, then renders dynamic content. `mount` runs those
//! steps in order for any component.

use crate::store::project_store::StoreResult;
use crate::store::shared::SharedProjectStore;
use crate::ui::surface::{Element, InsertPosition, SharedSurface};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

pub trait Component: Sized + 'static {
    /// Root node instantiated into the host.
    fn build_element(&self) -> Element;

    /// Registers handlers against the component's final shared handle.
    ///
    /// Handlers capture `this`, so their receiver is fixed here regardless of
    /// how the host later invokes them.
    fn configure(_this: &Rc<RefCell<Self>>, _store: &SharedProjectStore) -> StoreResult<()> {
        Ok(())
    }

    /// Renders state-dependent content under the root node.
    fn render_content(&self);
}

/// Instantiates `component` under `host_id`, configures and renders it.
pub fn mount<C: Component>(
    component: C,
    surface: &SharedSurface,
    host_id: &str,
    position: InsertPosition,
    store: &SharedProjectStore,
) -> StoreResult<Rc<RefCell<C>>> {
    let element = component.build_element();
    let element_id = element.id.clone();
    surface.borrow_mut().mount(host_id, element, position);

    let handle = Rc::new(RefCell::new(component));
    C::configure(&handle, store)?;
    handle.borrow().render_content();
    debug!("event=component_mount module=ui status=ok element={element_id} host={host_id}");
    Ok(handle)
}
