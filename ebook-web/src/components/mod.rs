pub mod menu_bar;
