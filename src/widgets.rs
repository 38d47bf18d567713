pub mod scrollbar;
