/// Entry surface the controller drives: the input control and the render loop around it.
pub trait InputHost: Send {
    /// Enables or disables the commit action of the input control.
    fn set_input_enabled(&mut self, enabled: bool);
    /// Returns focus to the input control.
    fn focus_input(&mut self);
    fn request_render(&mut self);
}
