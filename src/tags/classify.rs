use crate::session::error::InspectError;

// ============================================================================
// Tag classification table
// ============================================================================

/// Expand a semantic tag alias into the platform class names it covers.
///
/// The alias is trimmed and lower-cased before lookup, so `"Button"` and
/// `" button "` classify identically. Aliases must match the names in the
/// automation server's element class map.
///
/// `secure` is deliberately absent: the platform cannot distinguish a secure
/// textfield from a plain one, they are all EditTexts.
pub fn classify(tag_name: &str) -> Result<Vec<String>, InspectError> {
    let tag = tag_name.trim().to_lowercase();

    let classes = match tag.as_str() {
        "abslist" => widget(&["AbsListView"]),
        "absseek" => widget(&["AbsSeekBar"]),
        "absspinner" => widget(&["AbsSpinner"]),
        "absolute" => widget(&["AbsoluteLayout"]),
        "adapterview" => widget(&["AdapterView"]),
        "adapterviewanimator" => widget(&["AdapterViewAnimator"]),
        "adapterviewflipper" => widget(&["AdapterViewFlipper"]),
        "analogclock" => widget(&["AnalogClock"]),
        "appwidgethost" => widget(&["AppWidgetHostView"]),
        "autocomplete" => widget(&["AutoCompleteTextView"]),
        "button" => widget(&["Button", "ImageButton"]),
        "breadcrumbs" => widget(&["FragmentBreadCrumbs"]),
        "calendar" => widget(&["CalendarView"]),
        "checkbox" => widget(&["CheckBox"]),
        "checked" => widget(&["CheckedTextView"]),
        "chronometer" => widget(&["Chronometer"]),
        "compound" => widget(&["CompoundButton"]),
        "datepicker" => widget(&["DatePicker"]),
        "dialerfilter" => widget(&["DialerFilter"]),
        "digitalclock" => widget(&["DigitalClock"]),
        "drawer" => widget(&["SlidingDrawer"]),
        "expandable" => widget(&["ExpandableListView"]),
        "extract" => widget(&["ExtractEditText"]),
        "fragmenttabhost" => widget(&["FragmentTabHost"]),
        "frame" => widget(&["FrameLayout"]),
        "gallery" => widget(&["Gallery"]),
        "gesture" => widget(&["GestureOverlayView"]),
        "glsurface" => widget(&["GLSurfaceView"]),
        "grid" => widget(&["GridView"]),
        "gridlayout" => widget(&["GridLayout"]),
        "horizontal" => widget(&["HorizontalScrollView"]),
        "image" => widget(&["ImageView"]),
        "imagebutton" => widget(&["ImageButton"]),
        "imageswitcher" => widget(&["ImageSwitcher"]),
        "keyboard" => widget(&["KeyboardView"]),
        "linear" => widget(&["LinearLayout"]),
        "list" => widget(&["ListView"]),
        "media" => widget(&["MediaController"]),
        "mediaroutebutton" => widget(&["MediaRouteButton"]),
        "multiautocomplete" => widget(&["MultiAutoCompleteTextView"]),
        "numberpicker" => widget(&["NumberPicker"]),
        "pagetabstrip" => widget(&["PageTabStrip"]),
        "pagetitlestrip" => widget(&["PageTitleStrip"]),
        "progress" => widget(&["ProgressBar"]),
        "quickcontactbadge" => widget(&["QuickContactBadge"]),
        "radio" => widget(&["RadioButton"]),
        "radiogroup" => widget(&["RadioGroup"]),
        "rating" => widget(&["RatingBar"]),
        "relative" => widget(&["RelativeLayout"]),
        "row" => widget(&["TableRow"]),
        "rssurface" => widget(&["RSSurfaceView"]),
        "rstexture" => widget(&["RSTextureView"]),
        "scroll" => widget(&["ScrollView"]),
        "search" => widget(&["SearchView"]),
        "seek" => widget(&["SeekBar"]),
        "space" => widget(&["Space"]),
        "spinner" => widget(&["Spinner"]),
        "stack" => widget(&["StackView"]),
        "surface" => widget(&["SurfaceView"]),
        "switch" => widget(&["Switch"]),
        "tabhost" => widget(&["TabHost"]),
        "tabwidget" => widget(&["TabWidget"]),
        "table" => widget(&["TableLayout"]),
        "text" => widget(&["TextView"]),
        "textclock" => widget(&["TextClock"]),
        "textswitcher" => widget(&["TextSwitcher"]),
        "texture" => widget(&["TextureView"]),
        "textfield" => widget(&["EditText"]),
        "timepicker" => widget(&["TimePicker"]),
        "toggle" => widget(&["ToggleButton"]),
        "twolinelistitem" => widget(&["TwoLineListItem"]),
        // View is not a widget
        "view" => vec!["android.view.View".to_string()],
        "video" => widget(&["VideoView"]),
        "viewanimator" => widget(&["ViewAnimator"]),
        "viewflipper" => widget(&["ViewFlipper"]),
        "viewgroup" => widget(&["ViewGroup"]),
        "viewpager" => widget(&["ViewPager"]),
        "viewstub" => widget(&["ViewStub"]),
        "viewswitcher" => widget(&["ViewSwitcher"]),
        // WebView is not a widget
        "web" => vec!["android.webkit.WebView".to_string()],
        "window" => widget(&["FrameLayout"]),
        "zoom" => widget(&["ZoomButton"]),
        "zoomcontrols" => widget(&["ZoomControls"]),
        _ => return Err(InspectError::InvalidTag(tag)),
    };

    Ok(classes)
}

fn widget(names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|name| format!("android.widget.{}", name))
        .collect()
}
