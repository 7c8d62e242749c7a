pub const PAGE: &str = "min-h-screen bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900 text-white font-sans";
pub const HEADER: &str = "p-6 border-b border-slate-700/50 bg-slate-900/50 backdrop-blur-md sticky top-0 z-30";
pub const HEADER_INNER: &str = "max-w-7xl mx-auto flex items-center justify-between";
pub const BRAND_BADGE: &str = "w-8 h-8 rounded-full bg-gradient-to-tr from-pink-500 to-orange-500 flex items-center justify-center font-bold text-white shadow-lg";
pub const BRAND_TITLE: &str = "text-xl md:text-2xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-white to-slate-400";
pub const BUTTON_ICON: &str = "p-2 rounded-full hover:bg-slate-700 text-slate-400 hover:text-white transition-colors";
pub const MAIN: &str = "max-w-7xl mx-auto p-4 md:p-8 flex flex-col lg:flex-row gap-8";
pub const WHEEL_PANEL: &str = "flex-1 flex flex-col items-center justify-center min-h-[400px] bg-slate-800/30 rounded-3xl border border-slate-700/50 relative overflow-hidden p-6";
pub const CONTROLS_PANEL: &str = "bg-slate-800/80 backdrop-blur-md p-6 rounded-2xl border border-slate-700 h-full flex flex-col gap-6 shadow-xl";
pub const SECTION_TITLE: &str = "text-lg font-bold flex items-center gap-2";
pub const INPUT: &str = "w-full bg-slate-900 border border-slate-600 rounded-lg px-3 py-2 text-sm focus:ring-2 focus:ring-purple-500 outline-none";
pub const BUTTON_GENERATE: &str = "bg-purple-600 hover:bg-purple-500 disabled:bg-slate-600 text-white px-3 py-2 rounded-lg transition-colors";
pub const BUTTON_ADD: &str = "bg-blue-600 hover:bg-blue-500 disabled:bg-slate-600 text-white px-3 py-2 rounded-lg";
pub const CHIP: &str = "text-xs bg-slate-700 hover:bg-slate-600 disabled:opacity-50 px-2 py-1 rounded-md transition-colors text-slate-300";
pub const PRIZE_ROW: &str = "flex items-center justify-between bg-slate-700/50 p-2 rounded-lg hover:bg-slate-700 transition-colors border border-transparent hover:border-slate-600";
pub const BUTTON_REMOVE: &str = "text-slate-500 hover:text-red-400 disabled:opacity-30 transition-opacity px-2";
pub const SPIN_BUTTON: &str = "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-16 h-16 md:w-20 md:h-20 bg-white rounded-full flex items-center justify-center shadow-[0_0_15px_rgba(255,255,255,0.5)] z-10 hover:scale-105 active:scale-95 transition-all disabled:opacity-80 disabled:cursor-not-allowed border-4 border-slate-200";
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/70 backdrop-blur-sm";
pub const MODAL_CARD: &str = "bg-slate-800 rounded-2xl max-w-sm w-full border border-slate-600 shadow-2xl p-8 text-center relative overflow-hidden";
pub const MODAL_WINNER: &str = "text-4xl font-extrabold text-transparent bg-clip-text bg-gradient-to-r from-yellow-400 to-orange-500";
pub const MODAL_BUTTON: &str = "mt-4 w-full bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-500 hover:to-purple-500 text-white font-bold py-3 px-6 rounded-xl transition-all shadow-lg";
pub const TEXT_HINT: &str = "mt-8 text-slate-400 text-sm animate-pulse";
