use crate::tui::Action;

pub trait AppController {
    fn update(&mut self, action: Action);
    fn render(&mut self, f: &mut ratatui::Frame);
    fn should_quit(&self) -> bool;
}
