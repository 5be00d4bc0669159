pub mod repelsim_vis2d;
